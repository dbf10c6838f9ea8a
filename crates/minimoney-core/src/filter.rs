//! Transaction filtering
//!
//! Combines period, kind, category, and free-text checks into a single
//! predicate over a transaction snapshot. Text search matches the
//! description, the raw category key, and the catalog label for the
//! key, all case-insensitively.

use crate::catalog::CategoryLabels;
use crate::models::{Transaction, TransactionKind};
use crate::time::DateRange;

/// Filter specification over a transaction snapshot
///
/// `None` in `kind`/`category_key` means "all"; an empty `search`
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Restrict to one transaction kind
    pub kind: Option<TransactionKind>,
    /// Restrict to one category key
    pub category_key: Option<String>,
    /// Case-insensitive substring search
    pub search: String,
}

impl TransactionFilter {
    /// Filter restricted to a kind
    pub fn by_kind(kind: TransactionKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Check a single transaction against the filter within a resolved
    /// period
    pub fn matches(
        &self,
        tx: &Transaction,
        range: &DateRange,
        labels: &dyn CategoryLabels,
    ) -> bool {
        if !range.contains(&tx.calendar_day()) {
            return false;
        }

        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }

        if let Some(ref key) = self.category_key {
            if &tx.category_key != key {
                return false;
            }
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        tx.description.to_lowercase().contains(&needle)
            || tx.category_key.to_lowercase().contains(&needle)
            || labels
                .label_for(&tx.category_key)
                .map(|label| label.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }

    /// Apply the filter to a snapshot
    ///
    /// An empty snapshot yields an empty result, never an error.
    pub fn apply(
        &self,
        transactions: &[Transaction],
        range: &DateRange,
        labels: &dyn CategoryLabels,
    ) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx, range, labels))
            .cloned()
            .collect()
    }
}

/// Sort transactions most-recent-first, optionally truncated
///
/// This is the ordering the transaction list views use.
pub fn recent_first(transactions: &[Transaction], limit: Option<usize>) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}
