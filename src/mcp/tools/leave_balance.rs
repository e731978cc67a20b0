//! Tool for checking an employee's remaining leave days.
//!
//! The reply carries both the balance and the full leave history, or a
//! "not found" message for unknown employee ids.

use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::mcp::leave::LeaveService;
use crate::mcp::tools::{require_employee_id, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmployeeRequest {
    #[schemars(description = "Unique employee ID, e.g. E001")]
    pub employee_id: String,
}

pub fn check_leave_balance(
    service: &LeaveService,
    Parameters(args): Parameters<EmployeeRequest>,
) -> Result<CallToolResult, ErrorData> {
    let employee_id = require_employee_id(&args.employee_id)?;
    info!(employee_id, "checking leave balance");

    let report = service.check_balance(employee_id)?;
    Ok(text_result(report))
}
