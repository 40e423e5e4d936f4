/// Translate a UI string and substitute its `%N` arguments.
///
/// Works with anything exposing `tr(context, source, disambiguator, args)`:
/// a [`Catalog`](crate::catalog::Catalog), an `Arc<Catalog>` or a
/// [`LocalizationService`](crate::service::LocalizationService).
///
/// ```
/// use tscat::{catalog::Catalog, tr};
///
/// let catalog = Catalog::load(br#"<TS language="nl"><context><name>MainWindow</name>
/// <message><source>%1 joined %2</source><translation>%2: %1 is binnengekomen</translation></message>
/// <message><source>%1 voice</source><comment>can now transmit</comment>
///   <translation>%1 mag nu spreken</translation></message>
/// </context></TS>"#).unwrap();
///
/// assert_eq!(tr!(catalog, "MainWindow", "Quit"), "Quit");
/// assert_eq!(tr!(catalog, "MainWindow", "%1 joined %2"; "Bob", "Lobby"), "Lobby: Bob is binnengekomen");
/// assert_eq!(
///     tr!(catalog, "MainWindow", "%1 voice", disambiguation = "can now transmit"; "Bob"),
///     "Bob mag nu spreken"
/// );
/// ```
#[macro_export]
macro_rules! tr {
    ($catalog:expr, $context:expr, $source:expr, disambiguation = $note:expr $(,)?) => {
        $catalog.tr($context, $source, ::std::option::Option::Some($note), &[] as &[&str])
    };
    ($catalog:expr, $context:expr, $source:expr, disambiguation = $note:expr; $($arg:expr),+ $(,)?) => {
        $catalog.tr(
            $context,
            $source,
            ::std::option::Option::Some($note),
            &[$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
    ($catalog:expr, $context:expr, $source:expr $(,)?) => {
        $catalog.tr($context, $source, ::std::option::Option::None, &[] as &[&str])
    };
    ($catalog:expr, $context:expr, $source:expr; $($arg:expr),+ $(,)?) => {
        $catalog.tr(
            $context,
            $source,
            ::std::option::Option::None,
            &[$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
}
