//! Configuration management for minimoney
//!
//! This module handles loading, validation, and management of
//! minimoney configuration from YAML files: statistics defaults,
//! symbolic period ranges, and the category catalog.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Statistics defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Default period range for the details/filter views
    #[serde(default)]
    pub default_range: PeriodRange,
    /// Number of transactions shown in "recent" lists
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            default_range: PeriodRange::default(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> usize {
    10
}

/// Symbolic period range enumeration
///
/// Relative ranges are anchored to "today" and resolved by the core
/// engine; custom and calendar-month periods carry their own bounds and
/// are not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodRange {
    /// Last 7 days
    Week,
    /// Last month
    Month,
    /// Last 3 months
    #[serde(rename = "3months")]
    ThreeMonths,
    /// Last year
    Year,
}

impl Default for PeriodRange {
    fn default() -> Self {
        PeriodRange::Month
    }
}

impl std::str::FromStr for PeriodRange {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(PeriodRange::Week),
            "month" => Ok(PeriodRange::Month),
            "3months" | "threemonths" => Ok(PeriodRange::ThreeMonths),
            "year" => Ok(PeriodRange::Year),
            _ => Err(format!("Invalid period range: {}", s)),
        }
    }
}

impl std::fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodRange::Week => write!(f, "week"),
            PeriodRange::Month => write!(f, "month"),
            PeriodRange::ThreeMonths => write!(f, "3months"),
            PeriodRange::Year => write!(f, "year"),
        }
    }
}

/// Category definition (key into the catalog plus display hints)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    /// Stable catalog key (e.g., "food", "salary")
    pub key: String,
    /// Icon shown by the UI
    #[serde(default)]
    pub icon: String,
    /// Human-readable label
    #[serde(default)]
    pub label: String,
}

/// Category catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesConfig {
    /// Expense categories
    #[serde(default = "default_expense_categories")]
    pub expense: Vec<CategoryDef>,
    /// Income categories
    #[serde(default = "default_income_categories")]
    pub income: Vec<CategoryDef>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            expense: default_expense_categories(),
            income: default_income_categories(),
        }
    }
}

fn category(key: &str, icon: &str, label: &str) -> CategoryDef {
    CategoryDef {
        key: key.to_string(),
        icon: icon.to_string(),
        label: label.to_string(),
    }
}

fn default_expense_categories() -> Vec<CategoryDef> {
    vec![
        category("food", "🍔", "Food"),
        category("medical", "⚕️", "Medical"),
        category("transport", "🚌", "Transport"),
        category("housing", "🏠", "Housing"),
        category("snacks", "🍿", "Snacks"),
        category("learning", "🎓", "Learning"),
        category("communication", "📞", "Communication"),
        category("social", "💬", "Social"),
        category("investment", "📈", "Investment"),
        category("shopping", "🛒", "Shopping"),
    ]
}

fn default_income_categories() -> Vec<CategoryDef> {
    vec![
        category("salary", "💼", "Salary"),
        category("part_time", "👨‍💻", "Part-time"),
        category("financial", "💰", "Financial"),
        category("red_packet", "🧧", "Red packet"),
        category("other", "🎁", "Other"),
    ]
}

impl CategoriesConfig {
    /// Iterate over all categories, expense first
    pub fn all(&self) -> impl Iterator<Item = &CategoryDef> {
        self.expense.iter().chain(self.income.iter())
    }

    /// Look up a category by key
    pub fn get(&self, key: &str) -> Option<&CategoryDef> {
        self.all().find(|c| c.key == key)
    }

    /// Check whether a key exists in the catalog
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get the display label for a key, falling back to the key itself
    /// when the catalog entry has no label
    pub fn label_for(&self, key: &str) -> Option<String> {
        self.get(key).map(|c| {
            if c.label.is_empty() {
                c.key.clone()
            } else {
                c.label.clone()
            }
        })
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Statistics defaults
    #[serde(default)]
    pub stats: StatsConfig,
    /// Category catalog
    #[serde(default)]
    pub categories: CategoriesConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|_| ConfigError::IoError)?;

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::InvalidYaml {
                message: e.to_string(),
            }
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stats.recent_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "stats.recent_limit".to_string(),
                reason: "Recent limit must be greater than 0".to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for def in self.categories.all() {
            if def.key.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "categories".to_string(),
                    reason: "Category key must not be empty".to_string(),
                });
            }
            if !seen.insert(def.key.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate category key: {}", def.key),
                });
            }
        }

        Ok(())
    }
}
