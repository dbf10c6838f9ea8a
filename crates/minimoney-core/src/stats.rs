//! Period summaries and category breakdowns
//!
//! Everything here is a pure reduction over a borrowed snapshot: no
//! state is kept between calls, and an empty snapshot is a normal input
//! that produces zeroed results.

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind};
use crate::time::DateRange;

/// Financial summary for a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of income amounts
    pub total_income: Decimal,
    /// Sum of expense amounts
    pub total_expense: Decimal,
    /// `total_income - total_expense`
    pub balance: Decimal,
}

/// Aggregated statistics for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    /// Category key
    pub category_key: String,
    /// Sum of amounts in this category
    pub amount: Decimal,
    /// Share of the kind total, in percent; 0 when the total is 0
    pub percentage: f64,
}

/// Statistics payload for a period: summary plus both breakdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Period summary
    pub summary: Summary,
    /// Expense categories, largest first
    pub expense_breakdown: Vec<CategoryStat>,
    /// Income categories, largest first
    pub income_breakdown: Vec<CategoryStat>,
}

/// Compute income/expense totals and the balance for a snapshot
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => summary.total_income += tx.amount,
            TransactionKind::Expense => summary.total_expense += tx.amount,
        }
    }
    summary.balance = summary.total_income - summary.total_expense;
    summary
}

/// Group transactions of one kind by category, largest total first
///
/// Only categories that actually occur in the snapshot are reported.
/// Ties keep first-appearance order.
pub fn breakdown(transactions: &[Transaction], kind: TransactionKind) -> Vec<CategoryStat> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, Decimal> = HashMap::new();

    for tx in transactions.iter().filter(|t| t.kind == kind) {
        if !totals.contains_key(tx.category_key.as_str()) {
            order.push(tx.category_key.as_str());
        }
        *totals.entry(tx.category_key.as_str()).or_insert(Decimal::ZERO) += tx.amount;
    }

    let total: Decimal = totals.values().copied().sum();

    let mut stats: Vec<CategoryStat> = order
        .into_iter()
        .map(|key| {
            let amount = totals[key];
            let percentage = if total > Decimal::ZERO {
                (amount / total * Decimal::from(100))
                    .to_f64()
                    .unwrap_or(0.0)
            } else {
                0.0
            };
            CategoryStat {
                category_key: key.to_string(),
                amount,
                percentage,
            }
        })
        .collect();

    // Stable sort keeps first-appearance order for equal amounts
    stats.sort_by(|a, b| b.amount.cmp(&a.amount));
    stats
}

/// Compute the full statistics payload for a resolved period
///
/// Only the date is filtered here; kind/category/search filtering is a
/// separate concern of [`crate::filter::TransactionFilter`].
pub fn statistics(transactions: &[Transaction], range: &DateRange) -> Statistics {
    let in_period: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| range.contains(&tx.calendar_day()))
        .cloned()
        .collect();

    Statistics {
        summary: summarize(&in_period),
        expense_breakdown: breakdown(&in_period, TransactionKind::Expense),
        income_breakdown: breakdown(&in_period, TransactionKind::Income),
    }
}
