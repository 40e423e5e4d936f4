use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_stats_json() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;

    let output = test.command().args(["stats", "--json"]).output()?;
    let rows: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    let row = &rows[0];
    assert_eq!(row["locale"], "nl");
    assert_eq!(row["filePath"], "./translations/teamtalk_nl.ts");
    assert_eq!(row["translated"], 8);
    assert_eq!(row["unfinished"], 2);
    assert_eq!(row["vanished"], 1);
    assert_eq!(row["coveragePercent"].as_f64(), Some(80.0));
    assert!(output.status.success());

    Ok(())
}

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;

    let output = test.command().arg("stats").output()?;

    assert_eq!(
        stdout(&output),
        "Locale  File                           Translated  Unfinished  Vanished  Coverage\n\
         nl      ./translations/teamtalk_nl.ts           8           2         1     80.0%\n"
    );

    Ok(())
}

#[test]
fn test_stats_explicit_files_with_parse_error() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;
    test.write_file("broken.ts", "<TS><context>")?;

    let output = test
        .command()
        .args(["stats", "translations/teamtalk_nl.ts", "broken.ts"])
        .output()?;
    let out = stdout(&output);

    assert!(out.contains("nl      translations/teamtalk_nl.ts"), "stdout: {}", out);
    assert!(out.contains("parse-error"));
    assert!(out.contains("--> broken.ts"));
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}
