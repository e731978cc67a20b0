//! LeaveManager Model Context Protocol implementation.
//!
//! This crate exposes a small in-memory leave ledger over MCP.
//! The implementation is organized into:
//!
//! - `config`: Environment-based server configuration
//! - `error`: Error types and conversions
//! - `leave`: Date validation, the ledger and the leave operations
//! - `tools`: Individual MCP tools and the greeting resource
//!
//! The main entry point is the `LeaveManagerMCPFactory` which provides the MCP server
//! implementation and manages all tools.

pub mod config;
pub mod error;
pub mod leave;
pub mod tools;

use std::sync::Arc;

use axum::http::request;
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Implementation, InitializeRequestParam, InitializeResult,
        ListResourceTemplatesResult, PaginatedRequestParam, ProtocolVersion,
        ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tracing::info;

use crate::mcp::leave::LeaveService;
use crate::mcp::tools::{
    apply_leave::{self, ApplyLeaveRequest},
    greeting,
    leave_balance::{self, EmployeeRequest},
    leave_history,
};

#[derive(Clone)]
pub struct LeaveManagerMCPFactory {
    service: Arc<LeaveService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LeaveManagerMCPFactory {
    /// Every factory built from the same `service` shares one ledger.
    pub fn new(service: Arc<LeaveService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    // Thin delegating methods so the `tool_router` proc-macro can register
    // the tools; the implementations live in `mcp::tools::*`.

    #[tool(
        name = "checkLeaveBalance",
        description = "Check how many leave days an employee has left, together with the dates of all leave already granted."
    )]
    async fn check_leave_balance(
        &self,
        params: Parameters<EmployeeRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        leave_balance::check_leave_balance(&self.service, params)
    }

    #[tool(
        name = "applyLeave",
        description = "Apply for one day of leave for an employee on a date in DD-MM-YYYY format. The date must be today or later with a year between 2000 and 2050, and the employee needs at least one leave day left."
    )]
    async fn apply_leave(
        &self,
        params: Parameters<ApplyLeaveRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        apply_leave::apply_leave(&self.service, params)
    }

    #[tool(
        name = "getLeaveHistory",
        description = "Get the dates on which an employee has been granted leave, oldest first."
    )]
    async fn get_leave_history(
        &self,
        params: Parameters<EmployeeRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        leave_history::get_leave_history(&self.service, params)
    }
}

#[tool_handler]
impl ServerHandler for LeaveManagerMCPFactory {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "LeaveManager MCP Server: check leave balances, apply for leave (dates in DD-MM-YYYY format) and read leave history. Greetings are available as greeting://{name} resources."
                    .to_string(),
            ),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        if let Some(http_request_part) = context.extensions.get::<request::Parts>() {
            let initialize_headers = &http_request_part.headers;
            let initialize_uri = &http_request_part.uri;
            info!(?initialize_headers, %initialize_uri, "initialize from http server");
        }
        Ok(self.get_info())
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult::with_all_items(vec![
            greeting::greeting_resource_template()?,
        ]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        info!(uri = %request.uri, "reading resource");
        Ok(greeting::read_greeting(&request.uri)?)
    }
}
