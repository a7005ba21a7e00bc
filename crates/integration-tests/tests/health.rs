mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use harness::tool::StubTool;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let tool = StubTool::echoing("unused").unwrap();
    let config = ConfigBuilder::new().with_tool(tool.script(), tool.upload_dir()).build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);

    let body = resp.text().await.unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn health_endpoint_disabled() {
    let tool = StubTool::echoing("unused").unwrap();
    let config = ConfigBuilder::new()
        .with_tool(tool.script(), tool.upload_dir())
        .without_health()
        .build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 404);
}
