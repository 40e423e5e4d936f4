use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_dutch_catalog() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;

    let output = test.check_command().output()?;

    assert_snapshot!(stdout(&output), @r#"
    warning: "Audio Preprocessor Setup"  unfinished
      --> ./translations/teamtalk_nl.ts:6
       = note: in AudioPreprocessorDlg, shown untranslated for 'nl'

    warning: "Unban"  unfinished
      --> ./translations/teamtalk_nl.ts:24
       = note: in BannedUsersDlg, shown untranslated for 'nl'

    error: "%1 heeft het kanaal verlaten"  placeholders
      --> ./translations/teamtalk_nl.ts:49
       = note: missing %2 (source: "%1 left channel %2")

    ✘ 3 problems (1 error, 2 warnings)
    "#);
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_check_clean_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "translations/app_de.ts",
        r#"<TS version="2.1" language="de">
<context>
    <name>MainWindow</name>
    <message>
        <source>%1 joined channel %2</source>
        <translation>%1 hat Kanal %2 betreten</translation>
    </message>
</context>
</TS>"#,
    )?;

    let output = test.check_command().output()?;

    assert_eq!(
        stdout(&output),
        "✓ Checked 1 catalog file - no issues found\n"
    );
    assert!(output.status.success());

    Ok(())
}

#[test]
fn test_check_selected_rule_only() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;

    let output = test.check_command().arg("vanished").output()?;
    let out = stdout(&output);

    assert!(out.contains(r#"warning: "&Cancel"  vanished"#));
    assert!(out.contains("--> ./translations/teamtalk_nl.ts:67"));
    assert!(!out.contains("unfinished"));
    // Warnings alone do not fail the run.
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_check_reports_parse_errors() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;
    test.write_file(
        "translations/teamtalk_de.ts",
        "<TS language=\"de\">\n<context>\n    <name>MainWindow</name>\n",
    )?;

    let output = test.check_command().arg("duplicate").output()?;
    let out = stdout(&output);

    assert!(out.contains("parse-error"), "stdout: {}", out);
    assert!(out.contains("--> ./translations/teamtalk_de.ts"));
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_check_conflicting_duplicate() -> Result<()> {
    let test = CliTest::with_file(
        "translations/nl.ts",
        r#"<TS language="nl"><context><name>MainWindow</name>
<message><source>Join</source><translation>Deelnemen</translation></message>
<message><source>Join</source><translation>Meedoen</translation></message>
</context></TS>"#,
    )?;

    let output = test.check_command().arg("duplicate").output()?;

    assert_snapshot!(stdout(&output), @r#"
    warning: "Join"  duplicate
      --> ./translations/nl.ts:3
      = note: in MainWindow, also translated at line 2; this translation wins

    ✘ 1 problem (0 errors, 1 warning)
    "#);
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_config_translations_dir_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tscatrc.json",
        r#"{
        "translationsDir": "languages",
        "ignores": ["**/old/**"]
    }"#,
    )?;
    test.write_file(
        "languages/old/app_nl.ts",
        r#"<TS><context><name>A</name><message><source>Hello</source></message></context></TS>"#,
    )?;
    test.write_file(
        "languages/app_nl.ts",
        r#"<TS><context><name>A</name><message><source>Hi</source><translation>Hoi</translation></message></context></TS>"#,
    )?;

    let output = test.check_command().output()?;

    assert_eq!(
        stdout(&output),
        "✓ Checked 1 catalog file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_check_placeholders_disabled_in_config() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;
    test.write_file(".tscatrc.json", r#"{ "checkPlaceholders": false }"#)?;

    let output = test.check_command().output()?;

    assert!(!stdout(&output).contains("placeholders"));
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_check_missing_translations_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_translations_dir_flag() -> Result<()> {
    let test = CliTest::with_file("i18n/teamtalk_nl.ts", crate::TEAMTALK_NL)?;

    let output = test
        .check_command()
        .args(["placeholders", "--translations-dir", "i18n"])
        .output()?;

    assert!(stdout(&output).contains("--> i18n/teamtalk_nl.ts:49"));

    Ok(())
}
