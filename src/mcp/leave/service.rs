//! Leave operations over a shared ledger.
//!
//! `LeaveService` owns the ledger behind a mutex so that every MCP session
//! sees, and mutates, the same records. Each operation returns a report whose
//! `Display` output is the text handed back to MCP clients.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::mcp::error::LeaveError;
use crate::mcp::leave::{
    clock::Clock,
    date::{DateRejection, parse_leave_date},
    ledger::{Ledger, LeaveRecord},
};

#[derive(Debug)]
pub struct LeaveService {
    ledger: Mutex<Ledger>,
    clock: Arc<dyn Clock>,
}

impl LeaveService {
    pub fn new(ledger: Ledger, clock: Arc<dyn Clock>) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            clock,
        }
    }

    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        Self::new(Ledger::seeded(), clock)
    }

    fn ledger(&self) -> Result<MutexGuard<'_, Ledger>, LeaveError> {
        self.ledger.lock().map_err(|_| LeaveError::LedgerUnavailable)
    }

    /// Copy of an employee's current record.
    pub fn record(&self, employee_id: &str) -> Result<Option<LeaveRecord>, LeaveError> {
        Ok(self.ledger()?.find(employee_id).cloned())
    }

    pub fn check_balance(&self, employee_id: &str) -> Result<BalanceReport, LeaveError> {
        Ok(BalanceReport {
            employee_id: employee_id.to_string(),
            record: self.record(employee_id)?,
        })
    }

    pub fn get_history(&self, employee_id: &str) -> Result<HistoryReport, LeaveError> {
        Ok(HistoryReport {
            employee_id: employee_id.to_string(),
            history: self.record(employee_id)?.map(|record| record.history),
        })
    }

    /// Grants one day of leave on `leave_date` when the employee exists, the
    /// date is valid and at least one day is left.
    ///
    /// The lookup, the checks and the deduction happen under a single lock.
    pub fn apply_leave(
        &self,
        employee_id: &str,
        leave_date: &str,
    ) -> Result<LeaveApplication, LeaveError> {
        let today = self.clock.today();
        let mut ledger = self.ledger()?;

        let decision = match ledger.find(employee_id).map(|record| record.balance) {
            None => LeaveDecision::DeniedNotFound,
            Some(balance) => match parse_leave_date(leave_date, today) {
                Err(reason) => LeaveDecision::DeniedInvalidDate(reason),
                Ok(_) if balance == 0 => LeaveDecision::DeniedInsufficientBalance,
                Ok(_) => ledger
                    .apply_deduction(employee_id, leave_date)
                    .map_or(LeaveDecision::DeniedNotFound, |record| LeaveDecision::Granted {
                        balance: record.balance,
                        history: record.history.clone(),
                    }),
            },
        };
        drop(ledger);

        match &decision {
            LeaveDecision::Granted { balance, .. } => {
                info!(employee_id, leave_date, balance, "leave granted");
            }
            LeaveDecision::DeniedInvalidDate(reason) => {
                info!(employee_id, leave_date, %reason, "leave denied: invalid date");
            }
            LeaveDecision::DeniedInsufficientBalance => {
                info!(employee_id, leave_date, "leave denied: no leave days left");
            }
            LeaveDecision::DeniedNotFound => {
                info!(employee_id, leave_date, "leave denied: unknown employee");
            }
        }

        Ok(LeaveApplication {
            employee_id: employee_id.to_string(),
            decision,
        })
    }
}

/// Outcome of a leave application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveDecision {
    Granted { balance: u32, history: Vec<String> },
    DeniedInvalidDate(DateRejection),
    DeniedInsufficientBalance,
    DeniedNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveApplication {
    pub employee_id: String,
    pub decision: LeaveDecision,
}

impl LeaveApplication {
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self.decision, LeaveDecision::Granted { .. })
    }
}

// Denials share one message whatever the reason; the reason is only logged.
impl fmt::Display for LeaveApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.decision {
            LeaveDecision::Granted { balance, history } => write!(
                f,
                "Leave granted to employee with employee id: {}; Updated Remaining Balance: {balance}; Updated History: {history:?}",
                self.employee_id
            ),
            _ => write!(
                f,
                "Employee with employee id: {} cannot take a leave.",
                self.employee_id
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    pub employee_id: String,
    pub record: Option<LeaveRecord>,
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record {
            Some(LeaveRecord { balance, history }) => write!(
                f,
                "Employee with employee id: {} have {balance} leave days left. HISTORY: {history:?}",
                self.employee_id
            ),
            None => write!(f, "Employee with employee id: {} not found.", self.employee_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryReport {
    pub employee_id: String,
    pub history: Option<Vec<String>>,
}

impl fmt::Display for HistoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.history {
            Some(history) => write!(f, "Employee id: {}; HISTORY: {history:?}", self.employee_id),
            None => write!(
                f,
                "Employee with employee id: {} not found nor have any history.",
                self.employee_id
            ),
        }
    }
}
