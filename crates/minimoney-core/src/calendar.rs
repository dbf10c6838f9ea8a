//! Dense per-day aggregates for calendar and bar-chart views
//!
//! The grid always contains one bucket per calendar day of the
//! requested month, so the rendering layer never has to fill gaps.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::models::{Transaction, TransactionKind};
use crate::time::days_in_month;

/// Income/expense totals for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    /// Day of month, 1-based
    pub day: u32,
    /// Full date of the bucket
    pub date: NaiveDate,
    /// Income total for the day
    pub income: Decimal,
    /// Expense total for the day
    pub expense: Decimal,
}

/// Build the dense daily grid for a month
///
/// The result always has exactly `days_in_month(year, month)` entries
/// in ascending day order, zero-filled where no transactions exist.
/// Transactions dated outside the requested month are dropped, not an
/// error: callers routinely hand over snapshots wider than one month.
pub fn daily_buckets(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> Result<Vec<DailyBucket>, StatsError> {
    let day_count = days_in_month(year, month)?;

    let mut buckets: Vec<DailyBucket> = (1..=day_count)
        .map(|day| DailyBucket {
            day,
            // Day is within the month length, so the date always exists
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        })
        .collect();

    for tx in transactions {
        let day = tx.calendar_day();
        if day.year() != year || day.month() != month {
            log::debug!(
                target: "minimoney::calendar",
                "dropping transaction {} dated {} outside {}-{:02}",
                tx.id,
                day,
                year,
                month
            );
            continue;
        }

        let bucket = &mut buckets[(day.day() - 1) as usize];
        match tx.kind {
            TransactionKind::Income => bucket.income += tx.amount,
            TransactionKind::Expense => bucket.expense += tx.amount,
        }
    }

    Ok(buckets)
}
