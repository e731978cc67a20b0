//! Leave management core.
//!
//! - `clock`: where "today" comes from
//! - `date`: `DD-MM-YYYY` leave date validation
//! - `ledger`: per-employee balance and history records
//! - `service`: the balance, apply and history operations

pub mod clock;
pub mod date;
pub mod ledger;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{DateRejection, is_valid_leave_date, parse_leave_date};
pub use ledger::{Ledger, LeaveRecord};
pub use service::{BalanceReport, HistoryReport, LeaveApplication, LeaveDecision, LeaveService};
