//! Recurring transaction schedules
//!
//! The engine carries the pure half of auto-billing: deciding whether a
//! recurring entry is due and what its next execution date is. Actually
//! ticking a clock and persisting the materialized transaction belongs
//! to the surrounding application.

use chrono::{Days, Months, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind};

/// Execution frequency for a recurring transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every day
    Daily,
    /// Every 7 days
    Weekly,
    /// Every month, day-of-month clamped
    Monthly,
    /// Every year
    Yearly,
}

impl std::str::FromStr for Frequency {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(format!("Invalid frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Yearly => write!(f, "yearly"),
        }
    }
}

/// A recurring transaction template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoTransaction {
    /// Unique identifier
    pub id: i64,
    /// Description copied onto materialized transactions
    #[serde(default)]
    pub description: String,
    /// Amount copied onto materialized transactions
    pub amount: Decimal,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category copied onto materialized transactions
    pub category_key: String,
    /// How often the template fires
    pub frequency: Frequency,
    /// Next date the template is due
    pub next_execution_date: NaiveDate,
}

/// Compute the execution date following `from` for a frequency
pub fn next_execution_date(frequency: Frequency, from: NaiveDate) -> NaiveDate {
    match frequency {
        Frequency::Daily => from.checked_add_days(Days::new(1)).unwrap_or(from),
        Frequency::Weekly => from.checked_add_days(Days::new(7)).unwrap_or(from),
        Frequency::Monthly => from.checked_add_months(Months::new(1)).unwrap_or(from),
        Frequency::Yearly => from.checked_add_months(Months::new(12)).unwrap_or(from),
    }
}

impl AutoTransaction {
    /// Check whether the template is due on or before `today`
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_execution_date <= today
    }

    /// The execution date following the currently scheduled one
    pub fn advance(&self) -> NaiveDate {
        next_execution_date(self.frequency, self.next_execution_date)
    }

    /// Build the concrete transaction for one execution
    ///
    /// `id` is assigned by the store; `date` is the execution timestamp.
    pub fn materialize(&self, id: i64, date: NaiveDateTime) -> Transaction {
        Transaction {
            id,
            description: self.description.clone(),
            amount: self.amount,
            kind: self.kind,
            category_key: self.category_key.clone(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn template(frequency: Frequency, next: NaiveDate) -> AutoTransaction {
        AutoTransaction {
            id: 1,
            description: "rent".to_string(),
            amount: Decimal::from(1500),
            kind: TransactionKind::Expense,
            category_key: "housing".to_string(),
            frequency,
            next_execution_date: next,
        }
    }

    #[test]
    fn test_frequency_from_str() {
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("yearly".parse::<Frequency>().unwrap(), Frequency::Yearly);
        assert!("hourly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_next_execution_date() {
        let from = date(2024, 6, 15);
        assert_eq!(next_execution_date(Frequency::Daily, from), date(2024, 6, 16));
        assert_eq!(next_execution_date(Frequency::Weekly, from), date(2024, 6, 22));
        assert_eq!(next_execution_date(Frequency::Monthly, from), date(2024, 7, 15));
        assert_eq!(next_execution_date(Frequency::Yearly, from), date(2025, 6, 15));
    }

    #[test]
    fn test_monthly_clamps_day_of_month() {
        assert_eq!(
            next_execution_date(Frequency::Monthly, date(2024, 1, 31)),
            date(2024, 2, 29)
        );
        assert_eq!(
            next_execution_date(Frequency::Monthly, date(2023, 1, 31)),
            date(2023, 2, 28)
        );
    }

    #[test]
    fn test_yearly_from_leap_day() {
        assert_eq!(
            next_execution_date(Frequency::Yearly, date(2024, 2, 29)),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_is_due() {
        let template = template(Frequency::Monthly, date(2024, 6, 1));
        assert!(template.is_due(date(2024, 6, 1)));
        assert!(template.is_due(date(2024, 6, 15)));
        assert!(!template.is_due(date(2024, 5, 31)));
    }

    #[test]
    fn test_advance() {
        let template = template(Frequency::Weekly, date(2024, 6, 1));
        assert_eq!(template.advance(), date(2024, 6, 8));
    }

    #[test]
    fn test_materialize_copies_template_fields() {
        let template = template(Frequency::Monthly, date(2024, 6, 1));
        let when = date(2024, 6, 1).and_hms_opt(3, 0, 0).unwrap();
        let tx = template.materialize(42, when);

        assert_eq!(tx.id, 42);
        assert_eq!(tx.description, "rent");
        assert_eq!(tx.amount, Decimal::from(1500));
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.category_key, "housing");
        assert_eq!(tx.date, when);
    }
}
