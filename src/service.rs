//! Process-wide access to the active catalog.
//!
//! The service owns the current `Arc<Catalog>`. A locale switch loads a new
//! catalog completely, then publishes it with a single pointer swap. Readers
//! that cloned the previous `Arc` keep a valid catalog until they drop it.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::{info, warn};

use crate::{catalog::Catalog, config::Config, error::ServiceError};

/// Where translation resources come from.
pub trait CatalogSource: Send + Sync {
    /// Raw `.ts` document for an exact locale tag, or `None` if there is none.
    fn read(&self, locale: &str) -> io::Result<Option<Vec<u8>>>;

    /// Human readable location of a locale's resource, for diagnostics.
    fn describe(&self, locale: &str) -> String {
        locale.to_string()
    }
}

/// Reads `<dir>/<prefix>_<locale>.ts`, or `<dir>/<locale>.ts` without a prefix.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    file_prefix: String,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    /// Build a source from configuration, resolving the directory against `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        Self::new(base_dir.join(&config.translations_dir), config.file_prefix.clone())
    }

    pub fn path_for(&self, locale: &str) -> PathBuf {
        let file_name = if self.file_prefix.is_empty() {
            format!("{}.ts", locale)
        } else {
            format!("{}_{}.ts", self.file_prefix, locale)
        };
        self.dir.join(file_name)
    }
}

impl CatalogSource for DirectorySource {
    fn read(&self, locale: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(locale)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn describe(&self, locale: &str) -> String {
        self.path_for(locale).display().to_string()
    }
}

/// In-memory resources, e.g. documents embedded with `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locale: impl Into<String>, document: impl Into<Vec<u8>>) -> Self {
        self.insert(locale, document);
        self
    }

    pub fn insert(&mut self, locale: impl Into<String>, document: impl Into<Vec<u8>>) {
        self.documents.insert(locale.into(), document.into());
    }
}

impl CatalogSource for MemorySource {
    fn read(&self, locale: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.documents.get(locale).cloned())
    }
}

/// Resource names to try for a locale tag, most specific first.
///
/// Hyphens are normalized to underscores and the region is dropped as a
/// fallback, so `nl-BE` tries `nl_BE` then `nl`.
///
/// # Examples
///
/// ```
/// use tscat::service::locale_candidates;
///
/// assert_eq!(locale_candidates("nl-BE"), vec!["nl_BE", "nl"]);
/// assert_eq!(locale_candidates("nl"), vec!["nl"]);
/// ```
pub fn locale_candidates(locale: &str) -> Vec<String> {
    let normalized = locale.trim().replace('-', "_");
    let mut candidates = Vec::new();
    let mut current = normalized.as_str();

    while !current.is_empty() {
        candidates.push(current.to_string());
        match current.rfind('_') {
            Some(pos) => current = &current[..pos],
            None => break,
        }
    }
    candidates
}

struct Active {
    locale: Option<String>,
    catalog: Arc<Catalog>,
}

/// Owner of the active catalog.
///
/// Starts with the identity catalog, so lookups before the first switch
/// return source text.
pub struct LocalizationService {
    source: Box<dyn CatalogSource>,
    active: RwLock<Arc<Active>>,
}

impl LocalizationService {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            active: RwLock::new(Arc::new(Active {
                locale: None,
                catalog: Arc::new(Catalog::identity(None)),
            })),
        }
    }

    /// Service over `<translations_dir>/<prefix>_<locale>.ts` files.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        Self::new(DirectorySource::from_config(config, base_dir))
    }

    fn snapshot(&self) -> Arc<Active> {
        match self.active.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    fn publish(&self, locale: Option<String>, catalog: Arc<Catalog>) {
        let next = Arc::new(Active { locale, catalog });
        match self.active.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    /// The catalog serving lookups right now.
    pub fn current(&self) -> Arc<Catalog> {
        Arc::clone(&self.snapshot().catalog)
    }

    /// Locale tag passed to the last successful switch, if any.
    pub fn active_locale(&self) -> Option<String> {
        self.snapshot().locale.clone()
    }

    /// Load the catalog for `locale` and make it the active one.
    ///
    /// On failure the previously active catalog stays in place.
    pub fn switch_locale(&self, locale: &str) -> Result<Arc<Catalog>, ServiceError> {
        let catalog = Arc::new(self.load(locale)?);
        self.publish(Some(locale.to_string()), Arc::clone(&catalog));
        info!(
            locale,
            entries = catalog.len(),
            "Switched translation catalog"
        );
        Ok(catalog)
    }

    /// Like [`switch_locale`](Self::switch_locale), but publishes the identity
    /// catalog when loading fails, so every string shows its source text.
    pub fn switch_locale_or_identity(&self, locale: &str) -> Arc<Catalog> {
        match self.switch_locale(locale) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(locale, error = %err, "Falling back to source text");
                let identity = Arc::new(Catalog::identity(Some(locale.to_string())));
                self.publish(Some(locale.to_string()), Arc::clone(&identity));
                identity
            }
        }
    }

    /// Translate and format against the active catalog.
    pub fn tr<S: AsRef<str>>(
        &self,
        context: &str,
        source_text: &str,
        disambiguator: Option<&str>,
        args: &[S],
    ) -> String {
        self.current().tr(context, source_text, disambiguator, args)
    }

    fn load(&self, locale: &str) -> Result<Catalog, ServiceError> {
        let candidates = locale_candidates(locale);
        for candidate in &candidates {
            let bytes = self
                .source
                .read(candidate)
                .map_err(|source| ServiceError::Read {
                    locale: locale.to_string(),
                    source,
                })?;
            if let Some(bytes) = bytes {
                return Catalog::load(&bytes).map_err(|source| ServiceError::Parse {
                    locale: locale.to_string(),
                    source,
                });
            }
        }

        Err(ServiceError::NotFound {
            locale: locale.to_string(),
            tried: candidates
                .iter()
                .map(|c| self.source.describe(c))
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}
