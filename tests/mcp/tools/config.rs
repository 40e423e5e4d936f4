use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{TscatMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["translationsDir"], "./translations");
    assert_eq!(json_result["config"]["filePrefix"], "");
    assert_eq!(json_result["config"]["sourceLocale"], "en");
    assert_eq!(json_result["config"]["checkPlaceholders"], true);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "translationsDir": "languages",
            "filePrefix": "teamtalk",
            "ignores": ["**/old/**"]
        }))
        .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["translationsDir"], "languages");
    assert_eq!(json_result["config"]["filePrefix"], "teamtalk");
    assert_eq!(json_result["config"]["ignores"], json!(["**/old/**"]));
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::write(fixture.root_path().join(".tscatrc.json"), "{ not json").unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
