use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(stdout(&output), "✓ Created .tscatrc.json\n");
    assert!(output.status.success());

    let config: Value = serde_json::from_str(&test.read_file(".tscatrc.json")?)?;
    assert_eq!(config["translationsDir"], "./translations");
    assert_eq!(config["sourceLocale"], "en");
    assert_eq!(config["checkPlaceholders"], true);
    assert!(test.root().join(".tscatrc.json").is_file());

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: .tscatrc.json already exists"));
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}
