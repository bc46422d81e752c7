//! Summary message rendering
//!
//! Renders a [`Summary`] into the fixed plain-text template delivered over
//! email. Output is deterministic: identical summaries render to
//! byte-identical text, and month lines always appear in calendar order.

use crate::types::Summary;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Fixed subject line of the summary email
pub const SUBJECT: &str = "Your transaction summary";

/// Render the delivery-ready message for a summary
///
/// Monetary values are rounded to and rendered with exactly two decimal
/// places. An absent average (no debits or no credits) renders as the
/// literal placeholder `N/A`. Only months with a non-zero count are listed,
/// one `MonthName: count` line each, January through December.
pub fn render_message(summary: &Summary) -> String {
    let mut message = String::new();

    // Infallible: writing to a String cannot fail
    let _ = writeln!(message, "Subject: {}", SUBJECT);
    let _ = writeln!(message);
    let _ = writeln!(
        message,
        "Hi there, here's a summary of your recent account activity:"
    );
    let _ = writeln!(message);
    let _ = writeln!(
        message,
        "Total balance: {:.2}",
        summary.total_balance.round_dp(2)
    );
    let _ = writeln!(
        message,
        "Average debit amount: {}",
        render_amount(summary.average_debit)
    );
    let _ = writeln!(
        message,
        "Average credit amount: {}",
        render_amount(summary.average_credit)
    );
    let _ = writeln!(message, "Transactions by month:");

    for (month, count) in summary.monthly_counts.non_zero() {
        let _ = writeln!(message, "{}: {}", month.name(), count);
    }

    message
}

fn render_amount(amount: Option<Decimal>) -> String {
    match amount {
        Some(value) => format!("{:.2}", value.round_dp(2)),
        None => "N/A".to_string(),
    }
}
