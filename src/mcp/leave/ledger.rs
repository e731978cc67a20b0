//! In-memory employee leave ledger.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveRecord {
    /// Remaining leave days.
    pub balance: u32,
    /// Granted leave dates, oldest first, exactly as they were requested.
    pub history: Vec<String>,
}

impl LeaveRecord {
    pub fn new(balance: u32, history: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            balance,
            history: history.into_iter().map(Into::into).collect(),
        }
    }
}

/// Leave records keyed by employee id.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: HashMap<String, LeaveRecord>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The records every server process starts with.
    #[must_use]
    pub fn seeded() -> Self {
        let mut ledger = Self::new();
        ledger.insert("E001", LeaveRecord::new(18, ["2024-12-25", "2025-01-01"]));
        ledger.insert("E002", LeaveRecord::new(20, Vec::<String>::new()));
        ledger
    }

    pub fn insert(
        &mut self,
        employee_id: impl Into<String>,
        record: LeaveRecord,
    ) -> Option<LeaveRecord> {
        self.records.insert(employee_id.into(), record)
    }

    #[must_use]
    pub fn find(&self, employee_id: &str) -> Option<&LeaveRecord> {
        self.records.get(employee_id)
    }

    /// Takes one day off the balance and records `leave_date` in the history.
    ///
    /// Does not validate anything: callers check the date and that the balance
    /// is at least one before calling. Returns the updated record, or `None`
    /// when the employee is unknown.
    pub fn apply_deduction(&mut self, employee_id: &str, leave_date: &str) -> Option<&LeaveRecord> {
        let record = self.records.get_mut(employee_id)?;
        record.balance = record.balance.saturating_sub(1);
        record.history.push(leave_date.to_string());
        Some(record)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn seed_data() {
        let ledger = Ledger::seeded();
        assert_eq!(ledger.len(), 2);
        assert_eq!(
            ledger.find("E001"),
            Some(&LeaveRecord::new(18, ["2024-12-25", "2025-01-01"]))
        );
        assert_eq!(ledger.find("E002"), Some(&LeaveRecord::new(20, Vec::<String>::new())));
    }

    #[test]
    fn find_is_exact_match() {
        let ledger = Ledger::seeded();
        assert!(ledger.find("e001").is_none());
        assert!(ledger.find(" E001").is_none());
        assert!(ledger.find("E00").is_none());
    }

    #[test]
    fn deduction_decrements_and_appends() {
        let mut ledger = Ledger::seeded();
        let record = ledger.apply_deduction("E001", "20-06-2025").unwrap();
        assert_eq!(record.balance, 17);
        assert_eq!(record.history, ["2024-12-25", "2025-01-01", "20-06-2025"]);
    }

    #[test]
    fn deduction_keeps_duplicate_dates() {
        let mut ledger = Ledger::new();
        ledger.insert("E100", LeaveRecord::new(3, Vec::<String>::new()));
        ledger.apply_deduction("E100", "20-06-2025");
        ledger.apply_deduction("E100", "20-06-2025");
        let record = ledger.find("E100").unwrap();
        assert_eq!(record.balance, 1);
        assert_eq!(record.history, ["20-06-2025", "20-06-2025"]);
    }

    #[test]
    fn deduction_for_unknown_employee_changes_nothing() {
        let mut ledger = Ledger::seeded();
        assert!(ledger.apply_deduction("E999", "20-06-2025").is_none());
        assert_eq!(ledger.len(), 2);
        assert!(ledger.find("E999").is_none());
    }

    #[test]
    fn balance_never_goes_negative() {
        let mut ledger = Ledger::new();
        ledger.insert("E100", LeaveRecord::new(0, Vec::<String>::new()));
        assert_eq!(ledger.apply_deduction("E100", "20-06-2025").unwrap().balance, 0);
    }
}
