//! Transaction types for the statement digest
//!
//! A statement row becomes exactly one [`Transaction`]. Records are built
//! once by the parser and never mutated afterwards.

use chrono::Month;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Calendar date without a year component
///
/// Bank statement rows carry only `month/day`; this type preserves that
/// partial precision instead of fabricating a year. Month is 1-12 and day
/// is 1-31. With no year available, per-month day counts cannot be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

/// Error returned when a string is not a valid `month/day` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseMonthDayError;

impl fmt::Display for ParseMonthDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected month/day with month 1-12 and day 1-31")
    }
}

impl std::error::Error for ParseMonthDayError {}

impl MonthDay {
    /// Create a MonthDay from a month number (1-12) and day (1-31)
    pub fn new(month: u8, day: u8) -> Option<Self> {
        if !(1..=31).contains(&day) {
            return None;
        }
        let month = Month::try_from(month).ok()?;
        Some(MonthDay { month, day })
    }

    /// The calendar month
    pub fn month(&self) -> Month {
        self.month
    }

    /// The day of the month
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl FromStr for MonthDay {
    type Err = ParseMonthDayError;

    /// Parse strictly as `"M/D"`: bare base-10 integers separated by a
    /// single slash. No year, no sign, no surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s.split_once('/').ok_or(ParseMonthDayError)?;

        fn parse_component(s: &str) -> Option<u8> {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }

        let month = parse_component(month).ok_or(ParseMonthDayError)?;
        let day = parse_component(day).ok_or(ParseMonthDayError)?;

        MonthDay::new(month, day).ok_or(ParseMonthDayError)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month.number_from_month(), self.day)
    }
}

/// One ledger entry from a statement row
///
/// `amount` is signed: positive means credit, negative means debit, zero is
/// neither. `id` is taken verbatim from the source row; uniqueness is not
/// enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Opaque identifier from the source row
    pub id: String,

    /// Transaction date (month/day, no year)
    pub date: MonthDay,

    /// Signed amount
    pub amount: Decimal,
}
