use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

pub const TEAMTALK_NL: &str = include_str!("../fixtures/teamtalk_nl.ts");

/// Test fixture for MCP integration tests
///
/// Manages a temporary Qt project with a translations/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("translations"))?;
        // Keep config discovery inside the fixture
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with the given catalogs
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogs(vec![
    ///     ("app_nl.ts", "<TS language=\"nl\">...</TS>"),
    /// ])?;
    /// ```
    pub fn with_catalogs(catalogs: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (file_name, content) in catalogs {
            fixture.write_catalog(file_name, content)?;
        }
        Ok(fixture)
    }

    /// Write a catalog to translations/<file_name>
    pub fn write_catalog(&self, file_name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("translations").join(file_name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        Ok(())
    }

    /// Write a .tscatrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".tscatrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// The Dutch sample catalog, stored the way lupdate names it
pub fn fixture_teamtalk() -> Result<McpTestFixture> {
    let fixture = McpTestFixture::with_catalogs(vec![("teamtalk_nl.ts", TEAMTALK_NL)])?;
    fixture.write_config(&json!({ "filePrefix": "teamtalk" }))?;
    Ok(fixture)
}

/// Dutch sample plus a German catalog with its own gaps and a broken file
pub fn fixture_multi_locale() -> Result<McpTestFixture> {
    let fixture = fixture_teamtalk()?;
    fixture.write_catalog(
        "teamtalk_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.1" language="de">
<context>
    <name>MainWindow</name>
    <message>
        <source>%1 joined channel %2</source>
        <translation>%1 hat den Kanal betreten</translation>
    </message>
    <message>
        <source>Connect</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#,
    )?;
    fixture.write_catalog("teamtalk_fr.ts", "<TS language=\"fr\">\n<context>\n")?;
    Ok(fixture)
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let text_content = result.content[0]
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
