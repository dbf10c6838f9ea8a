//! Core aggregation and period-statistics engine for minimoney
//!
//! The engine reduces a read-only snapshot of transaction and asset
//! records into period summaries, category breakdowns, dense per-day
//! calendar aggregates, and asset trend series. It owns no persistent
//! state: every public operation is a pure function of its inputs, with
//! "today" injected wherever relative periods are resolved.
//!
//! Fetching, storing, and authorizing records is the job of the
//! surrounding application; so is rendering the computed aggregates.

pub mod calendar;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod models;
pub mod recurrence;
pub mod stats;
pub mod time;
pub mod trend;

pub use calendar::{daily_buckets, DailyBucket};
pub use catalog::{CategoryLabels, NoLabels};
pub use error::{ErrorCode, ErrorDetails, StatsError, StatsResult};
pub use filter::{recent_first, TransactionFilter};
pub use models::{Asset, AssetRecord, Transaction, TransactionKind};
pub use recurrence::{next_execution_date, AutoTransaction, Frequency};
pub use stats::{breakdown, statistics, summarize, CategoryStat, Statistics, Summary};
pub use time::{days_in_month, DateRange, PeriodSpec};
pub use trend::{asset_trend, latest_amount, TrendPoint};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use minimoney_config::PeriodRange;
    use rust_decimal::Decimal;

    fn tx(
        id: i64,
        kind: TransactionKind,
        category: &str,
        amount: i64,
        y: i32,
        m: u32,
        d: u32,
    ) -> Transaction {
        Transaction {
            id,
            description: format!("{} #{}", category, id),
            amount: Decimal::from(amount),
            kind,
            category_key: category.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_month_statistics_pipeline() {
        let snapshot = vec![
            tx(1, TransactionKind::Income, "salary", 1000, 2024, 6, 1),
            tx(2, TransactionKind::Expense, "food", 300, 2024, 6, 10),
            tx(3, TransactionKind::Expense, "food", 200, 2024, 6, 20),
            // Next month, must not leak into June
            tx(4, TransactionKind::Expense, "housing", 800, 2024, 7, 1),
        ];

        let today = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        let range = PeriodSpec::calendar_month(2024, 6).resolve(today).unwrap();
        let stats = statistics(&snapshot, &range);

        assert_eq!(stats.summary.total_income, Decimal::from(1000));
        assert_eq!(stats.summary.total_expense, Decimal::from(500));
        assert_eq!(stats.summary.balance, Decimal::from(500));
        assert_eq!(stats.expense_breakdown.len(), 1);
        assert_eq!(stats.expense_breakdown[0].category_key, "food");
        assert_eq!(stats.expense_breakdown[0].amount, Decimal::from(500));
        assert!((stats.expense_breakdown[0].percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_filtered_summary_pipeline() {
        let snapshot = vec![
            tx(1, TransactionKind::Income, "salary", 1000, 2024, 6, 1),
            tx(2, TransactionKind::Expense, "food", 120, 2024, 6, 5),
            tx(3, TransactionKind::Expense, "transport", 60, 2024, 6, 6),
        ];

        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let range = PeriodSpec::relative(PeriodRange::Month)
            .resolve(today)
            .unwrap();
        let filter = TransactionFilter::by_kind(TransactionKind::Expense);
        let filtered = filter.apply(&snapshot, &range, &NoLabels);
        let summary = summarize(&filtered);

        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expense, Decimal::from(180));
        assert_eq!(summary.balance, Decimal::from(-180));
    }

    #[test]
    fn test_calendar_and_statistics_agree_on_month_totals() {
        let snapshot = vec![
            tx(1, TransactionKind::Income, "salary", 1000, 2024, 6, 1),
            tx(2, TransactionKind::Expense, "food", 300, 2024, 6, 10),
            tx(3, TransactionKind::Expense, "snacks", 50, 2024, 6, 10),
            tx(4, TransactionKind::Expense, "food", 200, 2024, 5, 31),
        ];

        let buckets = daily_buckets(&snapshot, 2024, 6).unwrap();
        let bucket_income: Decimal = buckets.iter().map(|b| b.income).sum();
        let bucket_expense: Decimal = buckets.iter().map(|b| b.expense).sum();

        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let range = PeriodSpec::calendar_month(2024, 6).resolve(today).unwrap();
        let summary = statistics(&snapshot, &range).summary;

        assert_eq!(bucket_income, summary.total_income);
        assert_eq!(bucket_expense, summary.total_expense);
    }

    #[test]
    fn test_empty_snapshot_yields_empty_results_everywhere() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let range = PeriodSpec::relative(PeriodRange::Year)
            .resolve(today)
            .unwrap();

        let stats = statistics(&[], &range);
        assert_eq!(stats.summary, Summary::default());
        assert!(stats.expense_breakdown.is_empty());
        assert!(stats.income_breakdown.is_empty());
        assert!(recent_first(&[], Some(10)).is_empty());
    }
}
