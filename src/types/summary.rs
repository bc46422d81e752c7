//! Aggregate result types
//!
//! A [`Summary`] is produced once per pipeline run from a finalized
//! transaction list and consumed exactly once by the formatter.

use chrono::Month;
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// All twelve months in calendar order, used for deterministic iteration
const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Per-month transaction counts
///
/// Conceptually all 12 slots exist and default to zero; the serialized form
/// is sparse and emits only non-zero months, in January→December order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyCounts {
    counts: [u32; 12],
}

impl MonthlyCounts {
    /// Create an empty counter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the bucket for the given month
    pub fn record(&mut self, month: Month) {
        self.counts[month.number_from_month() as usize - 1] += 1;
    }

    /// Count for a single month
    pub fn get(&self, month: Month) -> u32 {
        self.counts[month.number_from_month() as usize - 1]
    }

    /// Total number of recorded transactions across all months
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Sparse view: the non-zero months with their counts, in calendar order
    pub fn non_zero(&self) -> impl Iterator<Item = (Month, u32)> + '_ {
        MONTHS
            .iter()
            .zip(self.counts.iter())
            .filter(|(_, &count)| count > 0)
            .map(|(&month, &count)| (month, count))
    }

    /// True when no month has a non-zero count
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

impl Serialize for MonthlyCounts {
    /// Serialize as a sparse `{"MonthName": count}` map in calendar order
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.non_zero().count()))?;
        for (month, count) in self.non_zero() {
            map.serialize_entry(month.name(), &count)?;
        }
        map.end()
    }
}

/// Aggregate statistics for one statement
///
/// `average_debit` and `average_credit` are `None` when their partition is
/// empty: an account with no debits has no average debit amount, and the
/// absence is represented explicitly rather than as a non-finite number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of every transaction amount, credits and debits combined
    pub total_balance: Decimal,

    /// Mean of the strictly-negative amounts, if any exist
    pub average_debit: Option<Decimal>,

    /// Mean of the strictly-positive amounts, if any exist
    pub average_credit: Option<Decimal>,

    /// Transaction counts bucketed by calendar month
    pub monthly_counts: MonthlyCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_default_to_zero() {
        let counts = MonthlyCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get(Month::June), 0);
        assert_eq!(counts.non_zero().count(), 0);
    }

    #[test]
    fn test_record_and_get() {
        let mut counts = MonthlyCounts::new();
        counts.record(Month::January);
        counts.record(Month::January);
        counts.record(Month::December);

        assert_eq!(counts.get(Month::January), 2);
        assert_eq!(counts.get(Month::December), 1);
        assert_eq!(counts.get(Month::February), 0);
        assert_eq!(counts.total(), 3);
        assert!(!counts.is_empty());
    }

    #[test]
    fn test_non_zero_is_in_calendar_order() {
        let mut counts = MonthlyCounts::new();
        // Recorded out of order on purpose
        counts.record(Month::November);
        counts.record(Month::February);
        counts.record(Month::July);

        let months: Vec<Month> = counts.non_zero().map(|(m, _)| m).collect();
        assert_eq!(months, vec![Month::February, Month::July, Month::November]);
    }

    #[test]
    fn test_serializes_sparse_in_month_order() {
        let mut counts = MonthlyCounts::new();
        counts.record(Month::February);
        counts.record(Month::January);
        counts.record(Month::January);

        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"January":2,"February":1}"#);
    }

    #[test]
    fn test_empty_counts_serialize_to_empty_map() {
        let json = serde_json::to_string(&MonthlyCounts::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_summary_serializes_none_averages_as_null() {
        let summary = Summary {
            total_balance: Decimal::ZERO,
            average_debit: None,
            average_credit: None,
            monthly_counts: MonthlyCounts::new(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value["average_debit"].is_null());
        assert!(value["average_credit"].is_null());
    }
}
