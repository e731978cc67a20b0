// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code, clippy::unwrap_used)]

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use leave_manager_mcp::mcp::leave::{FixedClock, Ledger, LeaveRecord, LeaveService};

/// The date every test treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// `today` shifted by `days`, formatted as DD-MM-YYYY.
pub fn leave_date(days: u64) -> String {
    today()
        .checked_add_days(Days::new(days))
        .unwrap()
        .format("%d-%m-%Y")
        .to_string()
}

/// Service over the seed data (E001, E002) with the clock pinned to `today`.
pub fn seeded_service() -> LeaveService {
    LeaveService::seeded(Arc::new(FixedClock(today())))
}

/// Service holding a single employee with the given balance and no history.
pub fn service_with(employee_id: &str, balance: u32) -> LeaveService {
    let mut ledger = Ledger::new();
    ledger.insert(employee_id, LeaveRecord::new(balance, Vec::<String>::new()));
    LeaveService::new(ledger, Arc::new(FixedClock(today())))
}
