//! Tool for listing the dates on which an employee was granted leave.

use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::CallToolResult};
use tracing::info;

use crate::mcp::leave::LeaveService;
use crate::mcp::tools::{leave_balance::EmployeeRequest, require_employee_id, text_result};

pub fn get_leave_history(
    service: &LeaveService,
    Parameters(args): Parameters<EmployeeRequest>,
) -> Result<CallToolResult, ErrorData> {
    let employee_id = require_employee_id(&args.employee_id)?;
    info!(employee_id, "fetching leave history");

    Ok(text_result(service.get_history(employee_id)?))
}
