//! MCP tools and resources for leave management.
//!
//! Each module implements one piece of the server surface:
//! - `leave_balance`: remaining leave days and history for an employee
//! - `apply_leave`: book one day of leave on a given date
//! - `leave_history`: dates of previously granted leave
//! - `greeting`: the `greeting://{name}` resource
//!
//! All tools share one `LeaveService` and its error handling.

pub mod apply_leave;
pub mod greeting;
pub mod leave_balance;
pub mod leave_history;

use rmcp::model::{CallToolResult, Content};

use crate::mcp::error::LeaveError;

fn require_employee_id(employee_id: &str) -> Result<&str, LeaveError> {
    if employee_id.is_empty() {
        return Err(LeaveError::InvalidParams("employee_id cannot be empty.".to_string()));
    }
    Ok(employee_id)
}

fn text_result(text: impl ToString) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.to_string())])
}
