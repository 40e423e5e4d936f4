use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .tscatrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Locale to resolve against, e.g. "nl" or "pt-BR"
    pub locale: String,
    /// Context name of the message
    pub context: String,
    /// Source text of the message
    pub source: String,
    /// Disambiguation comment, when the message has one
    pub disambiguation: Option<String>,
    /// Values for %1, %2, ... in order
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUnfinishedParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only report this locale
    pub locale: Option<String>,
    /// Page size (default 20, max 100)
    pub limit: Option<u32>,
    /// Items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanPlaceholdersParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only report this locale
    pub locale: Option<String>,
    /// Page size (default 20, max 100)
    pub limit: Option<u32>,
    /// Items to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translations_dir: String,
    pub file_prefix: String,
    pub source_locale: String,
    pub ignores: Vec<String>,
    pub check_placeholders: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translations_dir: c.translations_dir,
            file_prefix: c.file_prefix,
            source_locale: c.source_locale,
            ignores: c.ignores,
            check_placeholders: c.check_placeholders,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub translations_dir: String,
    pub source_locale: String,
    pub locales: Vec<LocaleInfo>,
    /// Catalog files that could not be loaded
    pub parse_errors: Vec<ParseErrorItem>,
}

/// Information about a single catalog
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    pub file_path: String,
    pub translated: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub coverage_percent: f32,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

// ============================================================
// Lookup Types (lookup)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub locale: String,
    /// Display text after placeholder substitution
    pub text: String,
    /// False when the source text was returned as fallback
    pub translated: bool,
    /// Status of the stored message ("translated", "unfinished", "vanished"), if any
    pub status: Option<String>,
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub files_checked: usize,
    pub parse_errors: usize,
    pub unfinished: RuleStats,
    pub vanished: RuleStats,
    pub duplicates: RuleStats,
    pub placeholders: RuleStats,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub total_count: usize,
    pub affected_locales: Vec<String>,
}

// ============================================================
// Unfinished Scan Types (scan_unfinished)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfinishedScanResult {
    pub total_count: usize,
    pub items: Vec<UnfinishedItem>,
    pub pagination: Pagination,
}

/// A message awaiting translation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfinishedItem {
    pub locale: String,
    pub file_path: String,
    pub line: usize,
    pub context: String,
    pub source: String,
    pub disambiguation: Option<String>,
}

// ============================================================
// Placeholder Scan Types (scan_placeholders)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderScanResult {
    pub total_count: usize,
    pub items: Vec<PlaceholderItem>,
    pub pagination: Pagination,
}

/// A translation whose %N placeholders differ from its source
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderItem {
    pub locale: String,
    pub file_path: String,
    pub line: usize,
    pub context: String,
    pub source: String,
    pub translation: String,
    pub missing: Vec<usize>,
    pub unexpected: Vec<usize>,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

impl Pagination {
    /// Slice one page out of `items`. `limit` defaults to 20 and is capped at 100.
    pub fn paginate<T>(items: Vec<T>, offset: Option<u32>, limit: Option<u32>) -> (Vec<T>, Self) {
        let limit = limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = offset.map(|v| v as usize).unwrap_or(0);
        let total_count = items.len();

        let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + page.len() < total_count;

        (
            page,
            Self {
                offset,
                limit,
                has_more,
            },
        )
    }
}
