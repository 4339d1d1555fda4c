//! Family registry: maps namespaced package type strings to the strategy
//! that places packages of that family.
//!
//! A family is identified by the leading segment of a type string, e.g. the
//! `dreamfactory` in `dreamfactory-plugin`. Classification is longest-prefix
//! match: when one registered key is a prefix of another, the longer key
//! wins deterministically.

mod strategy;

pub use strategy::{LayoutStrategy, LocationStrategy};

use std::collections::HashMap;
use std::sync::Arc;

/// Registry of package families, read-only once built.
///
/// Built once at process start via [`FamilyRegistry::builder`]; the
/// reverse-sorted key order used for classification is computed at build
/// time, not per call.
pub struct FamilyRegistry {
    strategies: HashMap<String, Arc<dyn LocationStrategy>>,
    /// Keys in reverse lexicographic order so the most specific prefix is
    /// tested first.
    keys_desc: Vec<String>,
}

impl FamilyRegistry {
    pub fn builder() -> FamilyRegistryBuilder {
        FamilyRegistryBuilder {
            strategies: HashMap::new(),
        }
    }

    /// Registry preloaded with the `dreamfactory` family and its stock
    /// extension layout.
    pub fn with_defaults() -> Self {
        Self::builder()
            .register(
                "dreamfactory",
                Arc::new(
                    LayoutStrategy::new()
                        .location("plugin", "extensions/plugins")
                        .location("app", "extensions/apps")
                        .location("library", "extensions/libraries"),
                ),
            )
            .build()
    }

    /// Find the family a type string belongs to.
    ///
    /// Returns the first registered key that is an exact prefix of
    /// `type_name`, testing keys in reverse lexicographic order. `None` is a
    /// normal outcome, not a fault.
    pub fn classify(&self, type_name: &str) -> Option<&str> {
        self.keys_desc
            .iter()
            .find(|key| type_name.starts_with(key.as_str()))
            .map(String::as_str)
    }

    /// Classify a type string and return the matched family together with
    /// its strategy.
    pub fn find(&self, type_name: &str) -> Option<(&str, &dyn LocationStrategy)> {
        let family = self.classify(type_name)?;
        let strategy = self.strategies.get(family)?;
        Some((family, strategy.as_ref()))
    }

    /// All registered family keys, in classification order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.keys_desc.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

/// Builder for [`FamilyRegistry`].
pub struct FamilyRegistryBuilder {
    strategies: HashMap<String, Arc<dyn LocationStrategy>>,
}

impl FamilyRegistryBuilder {
    /// Register a strategy for a family key.
    ///
    /// Keys must be non-empty. Registering the same key twice replaces the
    /// earlier strategy.
    pub fn register(mut self, key: impl Into<String>, strategy: Arc<dyn LocationStrategy>) -> Self {
        let key = key.into();
        debug_assert!(!key.is_empty(), "family key must be non-empty");
        self.strategies.insert(key, strategy);
        self
    }

    pub fn build(self) -> FamilyRegistry {
        let mut keys_desc: Vec<String> = self.strategies.keys().cloned().collect();
        keys_desc.sort_unstable_by(|a, b| b.cmp(a));
        FamilyRegistry {
            strategies: self.strategies,
            keys_desc,
        }
    }
}

/// Split `<family>-<location>` into its location keyword.
///
/// Returns `None` unless `type_name` is the family key followed by a hyphen
/// and a non-empty remainder.
pub(crate) fn split_location<'a>(type_name: &'a str, family: &str) -> Option<&'a str> {
    type_name
        .strip_prefix(family)?
        .strip_prefix('-')
        .filter(|location| !location.is_empty())
}
