#![allow(clippy::unwrap_used)]

mod common;

use common::{leave_date, seeded_service};
use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::{CallToolResult, ErrorCode}};
use serde_json::Value;

use leave_manager_mcp::mcp::tools::{
    apply_leave::{ApplyLeaveRequest, apply_leave},
    leave_balance::{EmployeeRequest, check_leave_balance},
    leave_history::get_leave_history,
};

fn employee(employee_id: &str) -> Parameters<EmployeeRequest> {
    Parameters(EmployeeRequest {
        employee_id: employee_id.to_string(),
    })
}

fn application(employee_id: &str, leave_date: &str) -> Parameters<ApplyLeaveRequest> {
    Parameters(ApplyLeaveRequest {
        employee_id: employee_id.to_string(),
        leave_date: leave_date.to_string(),
    })
}

fn text_of(result: Result<CallToolResult, ErrorData>) -> String {
    let value = serde_json::to_value(result.unwrap()).unwrap();
    assert_ne!(value["isError"], Value::Bool(true));
    value["content"][0]["text"].as_str().unwrap().to_string()
}

#[test]
fn test_check_leave_balance_tool() {
    let service = seeded_service();
    assert_eq!(
        text_of(check_leave_balance(&service, employee("E001"))),
        r#"Employee with employee id: E001 have 18 leave days left. HISTORY: ["2024-12-25", "2025-01-01"]"#
    );
}

#[test]
fn test_apply_leave_tool_grants_and_denies() {
    let service = seeded_service();
    let date = leave_date(7);

    assert_eq!(
        text_of(apply_leave(&service, application("E002", &date))),
        format!(
            r#"Leave granted to employee with employee id: E002; Updated Remaining Balance: 19; Updated History: ["{date}"]"#
        )
    );
    assert_eq!(
        text_of(apply_leave(&service, application("E002", "31-02-2026"))),
        "Employee with employee id: E002 cannot take a leave."
    );
    assert_eq!(
        text_of(apply_leave(&service, application("E404", &date))),
        "Employee with employee id: E404 cannot take a leave."
    );
}

#[test]
fn test_leave_history_tool() {
    let service = seeded_service();
    assert_eq!(
        text_of(get_leave_history(&service, employee("E001"))),
        r#"Employee id: E001; HISTORY: ["2024-12-25", "2025-01-01"]"#
    );
    assert_eq!(
        text_of(get_leave_history(&service, employee("X9"))),
        "Employee with employee id: X9 not found nor have any history."
    );
}

#[test]
fn test_empty_employee_id_is_invalid_params() {
    let service = seeded_service();
    for result in [
        check_leave_balance(&service, employee("")),
        get_leave_history(&service, employee("")),
        apply_leave(&service, application("", &leave_date(1))),
    ] {
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}

#[test]
fn test_request_schema_uses_snake_case_fields() {
    let request: ApplyLeaveRequest =
        serde_json::from_str(r#"{"employee_id": "E001", "leave_date": "20-06-2025"}"#).unwrap();
    assert_eq!(request.employee_id, "E001");
    assert_eq!(request.leave_date, "20-06-2025");

    let schema = serde_json::to_value(schemars::schema_for!(ApplyLeaveRequest)).unwrap();
    assert!(schema["properties"]["leave_date"]["description"]
        .as_str()
        .unwrap()
        .contains("DD-MM-YYYY"));
}
