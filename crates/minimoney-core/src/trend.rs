//! Asset trend series
//!
//! Turns an asset's balance snapshots into the chronological series the
//! trend chart renders, and exposes the latest balance the asset list
//! displays.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AssetRecord;

/// One point of an asset trend line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Snapshot date
    pub date: NaiveDate,
    /// Balance on that date; may be negative for liabilities
    pub amount: Decimal,
}

/// Build the trend series for an asset, oldest snapshot first
///
/// Records sharing a date keep their input order (stable sort).
pub fn asset_trend(records: &[AssetRecord]) -> Vec<TrendPoint> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
        .into_iter()
        .map(|r| TrendPoint {
            date: r.date,
            amount: r.amount,
        })
        .collect()
}

/// The most recent snapshot balance, if any records exist
pub fn latest_amount(records: &[AssetRecord]) -> Option<Decimal> {
    records.iter().max_by_key(|r| r.date).map(|r| r.amount)
}
