// src/server.rs
// =============================================================================
// This module exposes the SolutionFinder to AI agents over MCP.
//
// One tool, "CodingChallengesSolutionFinder":
//   input:  { "challenge": "wc tool" }
//   output: { "solutions": ["https://...", ...] }
//
// The host talks to us over stdin/stdout. rmcp handles the framing and
// the handshake; we only supply the tool and the server metadata.
//
// Failures come back as tool errors (isError: true) whose text starts with
// the ErrorKind, e.g. "RemoteFailure: GET ...: status 404 Not Found: ...".
// A lookup with no matches is a success with an empty list.
//
// When the host cancels a call, rmcp fires the request's CancellationToken
// and the fetch in flight is dropped.
// =============================================================================

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler, ServiceExt};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::finder::SolutionFinder;

pub const TOOL_NAME: &str = "CodingChallengesSolutionFinder";
pub const SERVER_NAME: &str = "Coding Challenges Solutions";
pub const SERVER_VERSION: &str = "v1.0.0";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindRequest {
    #[schemars(description = "the name of the Coding Challenge to look for")]
    pub challenge: String,
}

#[derive(Clone)]
pub struct SolutionsServer {
    finder: SolutionFinder,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SolutionsServer {
    pub fn new(finder: SolutionFinder) -> Self {
        Self {
            finder,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "CodingChallengesSolutionFinder",
        description = "Search the Coding Challenges Shared Solutions GitHub repo for shared solutions to a specific Coding Challenge"
    )]
    async fn find_solutions(
        &self,
        Parameters(request): Parameters<FindRequest>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.lookup(request, &context.ct).await
    }

    // The tool body, separate from the rmcp wrapper so tests can drive it
    // with their own token
    async fn lookup(
        &self,
        request: FindRequest,
        cancel: &CancellationToken,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = TOOL_NAME, challenge = %request.challenge, "tool called");

        match self.finder.find(&request.challenge, cancel).await {
            Ok(found) => {
                let payload = serde_json::to_value(&found)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::structured(payload))
            }
            Err(e) => {
                warn!(tool = TOOL_NAME, kind = %e.kind(), error = %e, "lookup failed");
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "{}: {}",
                    e.kind(),
                    e
                ))]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for SolutionsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Finds community solutions to Coding Challenges (codingchallenges.fyi). \
                 Call CodingChallengesSolutionFinder with the challenge name, e.g. \"wc tool\" or \"JSON Parser\"."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: SERVER_VERSION.into(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

// Serves the tool on stdin/stdout until the host disconnects
pub async fn serve_stdio(finder: SolutionFinder) -> anyhow::Result<()> {
    info!(source = finder.source_url(), "starting MCP server on stdio");

    let service = SolutionsServer::new(finder).serve(stdio()).await?;
    let reason = service.waiting().await?;

    info!(?reason, "MCP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinderConfig;
    use std::time::Duration;

    fn server_for(url: String) -> SolutionsServer {
        let config = FinderConfig::default()
            .with_source_url(url)
            .with_timeout(Duration::from_secs(5));
        SolutionsServer::new(SolutionFinder::new(&config).unwrap())
    }

    fn error_text(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_tool_is_registered() {
        let tools = SolutionsServer::tool_router().list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, TOOL_NAME);

        let properties = tools[0].input_schema.get("properties").unwrap();
        assert!(properties.get("challenge").is_some());
    }

    #[test]
    fn test_server_info() {
        let info = server_for("http://127.0.0.1:9/README.md".into()).get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert_eq!(info.server_info.version, SERVER_VERSION);
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn test_lookup_returns_structured_solutions() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/README.md")
            .with_status(200)
            .with_body("- [Build your own wc tool](https://a.com/x) by Foo\n- [Build your own wc tool](https://b.com/y)\n")
            .create_async()
            .await;

        let tool = server_for(format!("{}/README.md", server.url()));
        let result = tool
            .lookup(
                FindRequest {
                    challenge: "wc tool".into(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({ "solutions": ["https://a.com/x", "https://b.com/y"] }))
        );
    }

    #[tokio::test]
    async fn test_lookup_without_matches_has_empty_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/README.md")
            .with_status(200)
            .with_body("- [Build your own wc tool](https://a.com/x)\n")
            .create_async()
            .await;

        let tool = server_for(format!("{}/README.md", server.url()));
        let result = tool
            .lookup(
                FindRequest {
                    challenge: "Redis".into(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({ "solutions": [] }))
        );
    }

    #[tokio::test]
    async fn test_failures_are_tool_errors_with_kind() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/README.md")
            .with_status(404)
            .with_body("404: Not Found")
            .create_async()
            .await;

        let tool = server_for(format!("{}/README.md", server.url()));

        let result = tool
            .lookup(
                FindRequest {
                    challenge: "wc tool".into(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result.structured_content.is_none());
        assert!(error_text(&result).starts_with("RemoteFailure: "));

        let result = tool
            .lookup(
                FindRequest {
                    challenge: "  ".into(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(error_text(&result).starts_with("InvalidInput: "));
    }

    #[tokio::test]
    async fn test_cancelled_lookup_is_tool_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/README.md")
            .expect(0)
            .create_async()
            .await;

        // Same token rmcp hands us in RequestContext::ct, already fired
        let cancel = CancellationToken::new();
        cancel.cancel();

        let tool = server_for(format!("{}/README.md", server.url()));
        let result = tool
            .lookup(
                FindRequest {
                    challenge: "wc tool".into(),
                },
                &cancel,
            )
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(result.structured_content.is_none());
        assert!(error_text(&result).starts_with("Cancelled: "));
        mock.assert_async().await;
    }
}
