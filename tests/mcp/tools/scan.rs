use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{
    TscatMcpServer,
    types::{GetLocalesParams, ScanOverviewParams, ScanPlaceholdersParams, ScanUnfinishedParams},
};

use crate::{
    McpTestFixture, assert_pagination, extract_tool_result_json, fixture_multi_locale,
    fixture_teamtalk,
};

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales() {
    let fixture = fixture_multi_locale().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["sourceLocale"], "en");

    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 2);
    assert_eq!(locales[0]["locale"], "de");
    assert_eq!(locales[0]["translated"], 1);
    assert_eq!(locales[0]["unfinished"], 1);
    assert_eq!(locales[1]["locale"], "nl");
    assert_eq!(locales[1]["translated"], 8);
    assert_eq!(locales[1]["vanished"], 1);
    assert_eq!(locales[1]["coveragePercent"].as_f64(), Some(80.0));

    let parse_errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(parse_errors.len(), 1);
    assert!(
        parse_errors[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("teamtalk_fr.ts")
    );
}

#[tokio::test]
async fn test_get_locales_missing_translations_dir() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "translationsDir": "nowhere" }))
        .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_locales(params).await.is_err());
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview() {
    let fixture = fixture_multi_locale().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filesChecked"], 3);
    assert_eq!(json_result["parseErrors"], 1);
    assert_eq!(json_result["unfinished"]["totalCount"], 3);
    assert_eq!(json_result["unfinished"]["affectedLocales"], json!(["de", "nl"]));
    assert_eq!(json_result["vanished"]["totalCount"], 1);
    assert_eq!(json_result["vanished"]["affectedLocales"], json!(["nl"]));
    // "Connect" is unfinished once and translated once: not a conflict
    assert_eq!(json_result["duplicates"]["totalCount"], 0);
    assert_eq!(json_result["placeholders"]["totalCount"], 2);
    assert_eq!(json_result["placeholders"]["affectedLocales"], json!(["de", "nl"]));
}

// ============================================================================
// scan_unfinished tests
// ============================================================================

#[tokio::test]
async fn test_scan_unfinished() {
    let fixture = fixture_teamtalk().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanUnfinishedParams {
        project_root_path: fixture.root(),
        locale: None,
        limit: None,
        offset: None,
    });

    let result = server.scan_unfinished(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_pagination(&json_result, 0, 20, false);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["locale"], "nl");
    assert_eq!(items[0]["line"], 6);
    assert_eq!(items[0]["context"], "AudioPreprocessorDlg");
    assert_eq!(items[0]["source"], "Audio Preprocessor Setup");
    assert_eq!(items[1]["source"], "Unban");
    assert!(items[1]["disambiguation"].is_null());
}

#[tokio::test]
async fn test_scan_unfinished_pagination() {
    let fixture = fixture_teamtalk().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanUnfinishedParams {
        project_root_path: fixture.root(),
        locale: None,
        limit: Some(1),
        offset: Some(1),
    });

    let result = server.scan_unfinished(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_pagination(&json_result, 1, 1, false);
    assert_eq!(json_result["items"][0]["source"], "Unban");

    let params = Parameters(ScanUnfinishedParams {
        project_root_path: fixture.root(),
        locale: None,
        limit: Some(1),
        offset: None,
    });

    let result = server.scan_unfinished(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_pagination(&json_result, 0, 1, true);
}

#[tokio::test]
async fn test_scan_unfinished_filtered_by_locale() {
    let fixture = fixture_multi_locale().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanUnfinishedParams {
        project_root_path: fixture.root(),
        locale: Some("de".to_string()),
        limit: None,
        offset: None,
    });

    let result = server.scan_unfinished(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["locale"], "de");
    assert_eq!(json_result["items"][0]["source"], "Connect");
}

// ============================================================================
// scan_placeholders tests
// ============================================================================

#[tokio::test]
async fn test_scan_placeholders() {
    let fixture = fixture_teamtalk().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanPlaceholdersParams {
        project_root_path: fixture.root(),
        locale: None,
        limit: None,
        offset: None,
    });

    let result = server.scan_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_pagination(&json_result, 0, 20, false);

    let item = &json_result["items"][0];
    assert_eq!(item["locale"], "nl");
    assert_eq!(item["line"], 49);
    assert_eq!(item["source"], "%1 left channel %2");
    assert_eq!(item["translation"], "%1 heeft het kanaal verlaten");
    assert_eq!(item["missing"], json!([2]));
    assert_eq!(item["unexpected"], json!([]));
}

#[tokio::test]
async fn test_scan_placeholders_filtered_by_locale() {
    let fixture = fixture_multi_locale().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanPlaceholdersParams {
        project_root_path: fixture.root(),
        locale: Some("de".to_string()),
        limit: None,
        offset: None,
    });

    let result = server.scan_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["translation"], "%1 hat den Kanal betreten");
}
