//! Tool for booking a single day of leave.
//!
//! Leave is granted when the employee exists, the date is a valid
//! `DD-MM-YYYY` date in 2000-2050 that is not in the past, and at least one
//! leave day remains. Every denial produces the same "cannot take a leave"
//! reply; the specific reason is only written to the server log.

use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mcp::leave::LeaveService;
use crate::mcp::tools::{require_employee_id, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApplyLeaveRequest {
    #[schemars(description = "Unique employee ID, e.g. E001")]
    pub employee_id: String,
    #[schemars(
        description = "Requested leave date in DD-MM-YYYY format, e.g. 31-12-2025. Must be today or later, with a year between 2000 and 2050."
    )]
    pub leave_date: String,
}

pub fn apply_leave(
    service: &LeaveService,
    Parameters(ApplyLeaveRequest {
        employee_id,
        leave_date,
    }): Parameters<ApplyLeaveRequest>,
) -> Result<CallToolResult, ErrorData> {
    let employee_id = require_employee_id(&employee_id)?;
    let application = service.apply_leave(employee_id, &leave_date)?;
    Ok(text_result(application))
}
