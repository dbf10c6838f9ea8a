//! Category label resolution
//!
//! The engine does not own the category catalog; search filtering only
//! needs a way to turn a category key into its display label. That
//! capability is injected through the [`CategoryLabels`] trait.

use std::collections::HashMap;

use minimoney_config::CategoriesConfig;

/// Label resolution capability supplied by the surrounding application
pub trait CategoryLabels {
    /// Resolve a category key to its display label, if the catalog
    /// knows the key
    fn label_for(&self, key: &str) -> Option<String>;
}

impl<T: CategoryLabels + ?Sized> CategoryLabels for &T {
    fn label_for(&self, key: &str) -> Option<String> {
        (**self).label_for(key)
    }
}

impl CategoryLabels for CategoriesConfig {
    fn label_for(&self, key: &str) -> Option<String> {
        CategoriesConfig::label_for(self, key)
    }
}

impl CategoryLabels for HashMap<String, String> {
    fn label_for(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Catalog that resolves nothing; search then matches descriptions and
/// raw keys only
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLabels;

impl CategoryLabels for NoLabels {
    fn label_for(&self, _key: &str) -> Option<String> {
        None
    }
}
