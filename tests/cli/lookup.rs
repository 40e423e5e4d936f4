use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const CATALOG: &str = "translations/teamtalk_nl.ts";

#[test]
fn test_lookup_with_disambiguation_and_args() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;

    let output = test
        .command()
        .args(["lookup", CATALOG])
        .args(["--context", "MainWindow", "--source", "%1 voice"])
        .args(["--disambiguation", "can now transmit ..."])
        .args(["--arg", "Bob"])
        .output()?;

    assert_eq!(stdout(&output), "Bob mag nu spreken\n");
    assert!(output.status.success());

    Ok(())
}

#[test]
fn test_lookup_reorders_arguments() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;

    let output = test
        .command()
        .args(["lookup", CATALOG])
        .args(["--context", "MainWindow", "--source", "%1 joined channel %2"])
        .args(["--arg", "Bob", "--arg", "Lobby"])
        .output()?;

    assert_eq!(stdout(&output), "Lobby: Bob is binnengekomen\n");

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_dutch_catalog()?;

    let output = test
        .command()
        .args(["lookup", CATALOG])
        .args(["--context", "BannedUsersDlg", "--source", "Unban"])
        .output()?;

    assert_eq!(stdout(&output), "Unban\n");
    assert!(output.status.success());

    Ok(())
}

#[test]
fn test_lookup_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "<TS><context>")?;

    let output = test
        .command()
        .args(["lookup", "broken.ts", "--context", "A", "--source", "B"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load catalog: broken.ts"));

    Ok(())
}
