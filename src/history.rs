// history.rs

use std::fmt;

use crate::ops::Operation;
use crate::util::format_number;

/// One completed calculation. Immutable once created; rendering matches the
/// history listing format, e.g. "add 2.0 3.0 = 5.0".
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationRecord {
    op: Operation,
    lhs: f64,
    rhs: f64,
    result: f64,
}

impl CalculationRecord {
    pub fn new(op: Operation, lhs: f64, rhs: f64, result: f64) -> Self {
        Self {
            op,
            lhs,
            rhs,
            result,
        }
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.op,
            format_number(self.lhs),
            format_number(self.rhs),
            format_number(self.result)
        )
    }
}

/// Ordered store of past calculations for the current session. Insertion
/// order is chronological order; duplicates are allowed.
pub struct History {
    entries: Vec<CalculationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, record: CalculationRecord) {
        self.entries.push(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove and return the most recently added record. Undoing an empty
    /// history is a tolerated no-op, not an error.
    pub fn undo(&mut self) -> Option<CalculationRecord> {
        self.entries.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lhs: f64, rhs: f64) -> CalculationRecord {
        CalculationRecord::new(Operation::Add, lhs, rhs, lhs + rhs)
    }

    #[test]
    fn length_tracks_additions() {
        let mut history = History::new();
        assert!(history.is_empty());
        for i in 0..5 {
            history.add(record(i as f64, 1.0));
        }
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn listing_preserves_insertion_order_and_duplicates() {
        let mut history = History::new();
        history.add(record(1.0, 1.0));
        history.add(record(2.0, 2.0));
        history.add(record(1.0, 1.0));
        let listed: Vec<String> = history.iter().map(ToString::to_string).collect();
        assert_eq!(
            listed,
            vec!["add 1.0 1.0 = 2.0", "add 2.0 2.0 = 4.0", "add 1.0 1.0 = 2.0"]
        );
        // Listing is restartable and non-mutating.
        assert_eq!(history.iter().count(), 3);
        assert_eq!(history.iter().count(), 3);
    }

    #[test]
    fn undo_removes_exactly_the_last_record() {
        let mut history = History::new();
        history.add(record(1.0, 1.0));
        history.add(record(5.0, 2.0));
        let removed = history.undo();
        assert_eq!(removed, Some(record(5.0, 2.0)));
        let listed: Vec<String> = history.iter().map(ToString::to_string).collect();
        assert_eq!(listed, vec!["add 1.0 1.0 = 2.0"]);
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut history = History::new();
        assert_eq!(history.undo(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn clear_empties_regardless_of_prior_state() {
        let mut history = History::new();
        history.clear();
        assert!(history.is_empty());
        history.add(record(1.0, 2.0));
        history.add(record(3.0, 4.0));
        history.clear();
        assert_eq!(history.iter().count(), 0);
        // Idempotent.
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn record_rendering_matches_history_format() {
        let rec = CalculationRecord::new(Operation::Divide, 10.0, 4.0, 2.5);
        assert_eq!(rec.to_string(), "divide 10.0 4.0 = 2.5");
    }
}
