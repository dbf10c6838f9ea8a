//! Core data models for the bookkeeping engine
//!
//! All types here are immutable value objects: the engine borrows a
//! read-only snapshot of them for one computation and never mutates
//! input records. Wire field names are camelCase to match the JSON the
//! API layer exchanges with the frontend.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction kind enumeration
///
/// The sign of a transaction is carried here, never by the stored
/// amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, transfers received)
    Income,
    /// Money going out (food, transport, housing)
    Expense,
}

impl std::str::FromStr for TransactionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(format!("Invalid transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// A single dated income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, assigned by the originating store
    pub id: i64,
    /// Free-text description; used only for search, never for math
    #[serde(default)]
    pub description: String,
    /// Non-negative amount in the account currency
    pub amount: Decimal,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Key into the externally supplied category catalog; non-empty
    pub category_key: String,
    /// Transaction timestamp; aggregation truncates to the calendar day
    pub date: NaiveDateTime,
}

impl Transaction {
    /// The calendar day this transaction is aggregated under
    pub fn calendar_day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Check whether this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check whether this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount signed by kind: positive for income, negative for expense
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// A tracked asset (bank account, fund, wallet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

/// A dated balance snapshot for an asset
///
/// Unlike transactions, the amount is a signed balance, not a flow;
/// negative values represent liabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Unique identifier
    pub id: i64,
    /// Owning asset
    pub asset_id: i64,
    /// Snapshot date
    pub date: NaiveDate,
    /// Balance on that date; may be negative
    pub amount: Decimal,
}
