use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::{
        CheckContext,
        commands::check::{CheckRule, collect_issues},
    },
    config::load_config,
    error::ServiceError,
    issues::{Issue, Report},
    scan::CatalogScan,
    service::LocalizationService,
};

use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, GetLocalesParams, LocaleInfo, LocalesResult,
    LookupParams, LookupResult, Pagination, ParseErrorItem, PlaceholderItem,
    PlaceholderScanResult, RuleStats, ScanOverviewParams, ScanOverviewResult,
    ScanPlaceholdersParams, ScanUnfinishedParams, UnfinishedItem, UnfinishedScanResult,
};

#[derive(Clone)]
pub struct TscatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TscatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TscatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tscat configuration
    #[tool(description = "Get the current tscat configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Get available catalogs with their translation counts
    #[tool(
        description = "Get available locale catalogs (.ts files) with translated, unfinished and vanished counts."
    )]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let (ctx, scan) = load_scan(&params.0.project_root_path)?;

        let mut locales: Vec<LocaleInfo> = scan
            .catalogs
            .iter()
            .map(|loaded| {
                let stats = loaded.catalog.stats();
                LocaleInfo {
                    locale: loaded.locale.clone(),
                    file_path: loaded.file_path.clone(),
                    translated: stats.translated,
                    unfinished: stats.unfinished,
                    vanished: stats.vanished,
                    coverage_percent: stats.coverage_percent,
                }
            })
            .collect();
        locales.sort_by(|a, b| a.locale.cmp(&b.locale));

        let parse_errors = scan
            .failures
            .iter()
            .map(|f| ParseErrorItem {
                file_path: f.file_path.clone(),
                line: f.line,
                error: f.error.clone(),
            })
            .collect();

        json_result(&LocalesResult {
            translations_dir: ctx.translations_dir.to_string_lossy().to_string(),
            source_locale: ctx.config.source_locale,
            locales,
            parse_errors,
        })
    }

    /// Resolve one message the way the application would at runtime
    #[tool(
        description = "Resolve the display text of one message for a locale, with source-text fallback and %N substitution."
    )]
    pub async fn lookup(&self, params: Parameters<LookupParams>) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = Path::new(&params.project_root_path);
        let config = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;

        let service = LocalizationService::from_config(&config, root);
        let catalog = service.switch_locale(&params.locale).map_err(|e| match e {
            ServiceError::NotFound { .. } => McpError::invalid_params(e.to_string(), None),
            _ => McpError::internal_error(e.to_string(), None),
        })?;

        let disambiguator = params.disambiguation.as_deref();
        let entry = catalog.entry(&params.context, &params.source, disambiguator);
        let args = params.args.unwrap_or_default();
        let text = catalog.tr(&params.context, &params.source, disambiguator, args.as_slice());
        debug!(locale = %params.locale, context = %params.context, "MCP lookup");

        json_result(&LookupResult {
            locale: params.locale,
            text,
            translated: entry.and_then(|e| e.display_text()).is_some(),
            status: entry.map(|e| e.status.to_string()),
        })
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get statistics of all catalog issues (parse errors, unfinished, vanished, conflicting duplicates, placeholder mismatches) without detailed items. Use this first."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let (_, scan) = load_scan(&params.0.project_root_path)?;
        let locale_of = locales_by_file(&scan);
        let issues = collect_issues(&scan, &CheckRule::all());

        let mut stats: HashMap<&str, (usize, BTreeSet<String>)> = HashMap::new();
        let mut parse_errors = 0;
        for issue in &issues {
            let key = match issue {
                Issue::ParseError(_) => {
                    parse_errors += 1;
                    continue;
                }
                Issue::Unfinished(_) => "unfinished",
                Issue::Vanished(_) => "vanished",
                Issue::DuplicateKey(_) => "duplicates",
                Issue::PlaceholderMismatch(_) => "placeholders",
            };
            let entry = stats.entry(key).or_default();
            entry.0 += 1;
            if let Some(locale) = locale_of.get(issue.location().file_path()) {
                entry.1.insert(locale.clone());
            }
        }

        let mut take = |key: &str| {
            stats
                .remove(key)
                .map(|(total_count, locales)| RuleStats {
                    total_count,
                    affected_locales: locales.into_iter().collect(),
                })
                .unwrap_or_default()
        };

        json_result(&ScanOverviewResult {
            files_checked: scan.files_checked(),
            parse_errors,
            unfinished: take("unfinished"),
            vanished: take("vanished"),
            duplicates: take("duplicates"),
            placeholders: take("placeholders"),
        })
    }

    /// List messages that still need a translation
    #[tool(
        description = "List messages still marked unfinished (shown untranslated at runtime). Returns paginated list, optionally filtered by locale."
    )]
    pub async fn scan_unfinished(
        &self,
        params: Parameters<ScanUnfinishedParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (_, scan) = load_scan(&params.project_root_path)?;

        let all_items: Vec<UnfinishedItem> = collect_issues(&scan, &[CheckRule::Unfinished])
            .into_iter()
            .filter_map(|issue| match issue {
                Issue::Unfinished(unfinished) => Some(UnfinishedItem {
                    locale: unfinished.locale,
                    file_path: unfinished.context.file_path,
                    line: unfinished.context.line,
                    context: unfinished.context.context,
                    source: unfinished.context.source_text,
                    disambiguation: unfinished.context.disambiguator,
                }),
                _ => None,
            })
            .filter(|item| matches_locale(&params.locale, &item.locale))
            .collect();

        let total_count = all_items.len();
        let (items, pagination) = Pagination::paginate(all_items, params.offset, params.limit);

        json_result(&UnfinishedScanResult {
            total_count,
            items,
            pagination,
        })
    }

    /// List translations whose placeholders differ from the source
    #[tool(
        description = "List translations whose %N placeholders differ from the source text. Returns paginated list, optionally filtered by locale."
    )]
    pub async fn scan_placeholders(
        &self,
        params: Parameters<ScanPlaceholdersParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (_, scan) = load_scan(&params.project_root_path)?;
        let locale_of = locales_by_file(&scan);

        let all_items: Vec<PlaceholderItem> = collect_issues(&scan, &[CheckRule::Placeholders])
            .into_iter()
            .filter_map(|issue| match issue {
                Issue::PlaceholderMismatch(mismatch) => Some(PlaceholderItem {
                    locale: locale_of
                        .get(&mismatch.context.file_path)
                        .cloned()
                        .unwrap_or_default(),
                    file_path: mismatch.context.file_path,
                    line: mismatch.context.line,
                    context: mismatch.context.context,
                    source: mismatch.context.source_text,
                    translation: mismatch.translation,
                    missing: mismatch.missing,
                    unexpected: mismatch.unexpected,
                }),
                _ => None,
            })
            .filter(|item| matches_locale(&params.locale, &item.locale))
            .collect();

        let total_count = all_items.len();
        let (items, pagination) = Pagination::paginate(all_items, params.offset, params.limit);

        json_result(&PlaceholderScanResult {
            total_count,
            items,
            pagination,
        })
    }
}

fn load_scan(project_root_path: &str) -> Result<(CheckContext, CatalogScan), McpError> {
    let ctx = CheckContext::from_root(Path::new(project_root_path), None, false)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;
    let scan = ctx
        .scan()
        .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;
    Ok((ctx, scan))
}

fn locales_by_file(scan: &CatalogScan) -> HashMap<String, String> {
    scan.catalogs
        .iter()
        .map(|c| (c.file_path.clone(), c.locale.clone()))
        .collect()
}

/// A requested "pt-BR" also matches catalogs tagged "pt_BR".
fn matches_locale(requested: &Option<String>, locale: &str) -> bool {
    match requested {
        Some(requested) => requested.replace('-', "_") == locale.replace('-', "_"),
        None => true,
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for TscatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscat MCP helps AI agents inspect Qt Linguist (.ts) translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get catalogs with their translation counts\n\
                 3. lookup - Resolve one message for a locale as the application would\n\
                 4. scan_overview - Get statistics of all catalog issues\n\
                 5. scan_unfinished - Get messages that still need a translation (paginated)\n\
                 6. scan_placeholders - Get translations with wrong %N placeholders (paginated)\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix placeholder mismatches first; they lose runtime data\n\
                 3. Then translate unfinished messages locale by locale"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    info!("Starting MCP server on stdio");
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TscatMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
