//! Aggregate computation over a transaction list
//!
//! Pure function of its input: no I/O, no state, no failure modes. The
//! "no debits" / "no credits" cases surface as `None` averages on the
//! resulting [`Summary`]; the division is simply never performed for an
//! empty partition.

use crate::types::{MonthlyCounts, Summary, Transaction};
use rust_decimal::Decimal;

/// Compute the aggregate statistics for a finalized transaction list
///
/// * `total_balance` is the sum of every amount, in input order.
/// * Credits are the strictly-positive amounts, debits the strictly-negative
///   ones; a zero amount joins neither partition and affects neither average.
/// * Every transaction increments exactly one month bucket, regardless of
///   sign, so the monthly counts always sum to the transaction count.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_balance = Decimal::ZERO;
    let mut credit_sum = Decimal::ZERO;
    let mut credit_count = 0u32;
    let mut debit_sum = Decimal::ZERO;
    let mut debit_count = 0u32;
    let mut monthly_counts = MonthlyCounts::new();

    for transaction in transactions {
        total_balance += transaction.amount;

        if transaction.amount > Decimal::ZERO {
            credit_sum += transaction.amount;
            credit_count += 1;
        } else if transaction.amount < Decimal::ZERO {
            debit_sum += transaction.amount;
            debit_count += 1;
        }

        monthly_counts.record(transaction.date.month());
    }

    Summary {
        total_balance,
        average_debit: average(debit_sum, debit_count),
        average_credit: average(credit_sum, credit_count),
        monthly_counts,
    }
}

fn average(sum: Decimal, count: u32) -> Option<Decimal> {
    if count == 0 {
        None
    } else {
        Some(sum / Decimal::from(count))
    }
}
