//! MCP transport binding.
//!
//! MmctlServer -> rmcp::ServerHandler (tools capability only).
//! Discovery lists every registry definition; calls go through
//! `ToolRegistry::dispatch`. Served over stdio.

use std::sync::Arc;

use anyhow::{Context, Result};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::transport::stdio;
use rmcp::{ErrorData as McpError, ServiceExt};

use crate::config::ServerConfig;
use crate::runner::{Executor, ProcessRunner};
use crate::tools::catalog::builtin_registry;
use crate::tools::{ToolError, ToolRegistry};

const INSTRUCTIONS: &str = "Mattermost administration through mmctl in local mode.\n\n\
    Each tool maps to one mmctl subcommand; `mmctl` runs an arbitrary command line. \
    Output is returned verbatim. Failures come back as text starting with 'Error: '.";

#[derive(Debug, Clone)]
pub struct MmctlServer {
    registry: Arc<ToolRegistry>,
    executor: Arc<Executor>,
    structured_errors: bool,
}

impl MmctlServer {
    pub fn new(registry: ToolRegistry, executor: Executor, structured_errors: bool) -> Self {
        Self {
            registry: Arc::new(registry),
            executor: Arc::new(executor),
            structured_errors,
        }
    }

    /// Built-in catalog running the configured binary as real processes.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let registry = builtin_registry().context("Failed to build tool registry")?;
        let executor = Executor::new(
            config.program.clone(),
            config.mode_flag.clone(),
            Arc::new(ProcessRunner),
        );
        Ok(Self::new(registry, executor, config.structured_errors))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Discovery view, name ordered.
    pub fn tools(&self) -> Vec<Tool> {
        self.registry.iter().map(|d| d.to_tool()).collect()
    }

    /// One call, transport independent. Missing arguments count as `{}`.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .registry
            .dispatch(name, arguments.unwrap_or_default(), &self.executor)
            .await
            .map_err(to_mcp_error)?;
        Ok(response.into_call_result(self.structured_errors))
    }

    /// Serve on stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> Result<()> {
        tracing::info!(
            tools = self.registry.len(),
            program = self.executor.program(),
            "serving on stdio"
        );
        let service = self
            .serve(stdio())
            .await
            .context("Failed to start MCP service")?;
        service.waiting().await.context("MCP service terminated")?;
        tracing::info!("server shutdown complete");
        Ok(())
    }
}

fn to_mcp_error(err: ToolError) -> McpError {
    match err {
        ToolError::UnknownTool(_) | ToolError::InvalidArguments { .. } => {
            McpError::invalid_params(err.to_string(), None)
        }
        ToolError::DuplicateName(_) => McpError::internal_error(err.to_string(), None),
    }
}

impl rmcp::ServerHandler for MmctlServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&request.name, request.arguments).await
    }
}
