//! Path resolution: classification composed with the matched family
//! strategy.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{PlacerError, Result};
use crate::family::{FamilyRegistry, split_location};
use crate::package::PackageDescriptor;

/// Resolves a package to its repository-relative install path.
///
/// Paths are recomputed on every call; package metadata may change between
/// calls, so nothing is cached here.
pub struct PathResolver {
    families: Arc<FamilyRegistry>,
}

impl PathResolver {
    pub fn new(families: Arc<FamilyRegistry>) -> Self {
        Self { families }
    }

    /// Repository-relative install path for `package`.
    ///
    /// Fails with [`PlacerError::UnsupportedType`] when no family matches
    /// the package type, and propagates
    /// [`PlacerError::UnrecognizedLocation`] from the matched strategy.
    pub fn resolve(&self, package: &PackageDescriptor) -> Result<PathBuf> {
        let (family, strategy) =
            self.families
                .find(&package.type_name)
                .ok_or_else(|| PlacerError::UnsupportedType {
                    type_name: package.type_name.clone(),
                })?;
        strategy.install_path(package, family)
    }

    /// True iff a family matches `type_name` and the remainder after the
    /// family key and its hyphen separator is one of the strategy's
    /// recognized location keywords (or the strategy accepts any keyword).
    ///
    /// The accepted surface is computed from the strategy's keyword set at
    /// call time; strategies self-register their support surface.
    pub fn supports_type(&self, type_name: &str) -> bool {
        let Some((family, strategy)) = self.families.find(type_name) else {
            return false;
        };
        let Some(location) = split_location(type_name, family) else {
            return false;
        };
        let keywords = strategy.locations();
        keywords.is_empty() || keywords.contains(&location)
    }
}
