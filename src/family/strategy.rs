//! Per-family placement rules.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{PlacerError, Result};
use crate::family::split_location;
use crate::package::PackageDescriptor;

/// Placement rules for one package family.
///
/// Strategies are pure with respect to the filesystem: they compute where a
/// package belongs, they never touch storage.
pub trait LocationStrategy: Send + Sync {
    /// Relative install path for `package` within `family`.
    fn install_path(&self, package: &PackageDescriptor, family: &str) -> Result<PathBuf>;

    /// Location keywords this strategy recognizes. An empty set means the
    /// strategy accepts any keyword.
    fn locations(&self) -> Vec<&str>;
}

/// Keyword-to-directory layout shared by most families.
///
/// Each recognized location keyword maps to a relative directory; packages
/// install into `<directory>/<package name>`. A wildcard layout instead
/// accepts any keyword and installs into `<prefix>/<keyword>/<package name>`.
pub struct LayoutStrategy {
    locations: BTreeMap<String, String>,
    wildcard_prefix: Option<String>,
}

impl LayoutStrategy {
    pub fn new() -> Self {
        Self {
            locations: BTreeMap::new(),
            wildcard_prefix: None,
        }
    }

    /// Add a recognized location keyword and the directory it installs to.
    pub fn location(mut self, keyword: impl Into<String>, dir: impl Into<String>) -> Self {
        self.locations.insert(keyword.into(), dir.into());
        self
    }

    /// Layout that accepts any location keyword, rooted at `prefix`.
    pub fn wildcard(prefix: impl Into<String>) -> Self {
        Self {
            locations: BTreeMap::new(),
            wildcard_prefix: Some(prefix.into()),
        }
    }
}

impl Default for LayoutStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationStrategy for LayoutStrategy {
    fn install_path(&self, package: &PackageDescriptor, family: &str) -> Result<PathBuf> {
        let Some(location) = split_location(&package.type_name, family) else {
            return Err(PlacerError::UnrecognizedLocation {
                family: family.to_string(),
                location: package
                    .type_name
                    .strip_prefix(family)
                    .unwrap_or(&package.type_name)
                    .trim_start_matches('-')
                    .to_string(),
            });
        };

        if let Some(dir) = self.locations.get(location) {
            return Ok(PathBuf::from(dir).join(&package.name));
        }

        if let Some(prefix) = &self.wildcard_prefix {
            return Ok(PathBuf::from(prefix).join(location).join(&package.name));
        }

        if self.locations.is_empty() {
            // No placement rules at all: any keyword, relative to the root.
            return Ok(PathBuf::from(location).join(&package.name));
        }

        Err(PlacerError::UnrecognizedLocation {
            family: family.to_string(),
            location: location.to_string(),
        })
    }

    // An empty set signals that any keyword is accepted, so a layout with a
    // wildcard enumerates nothing even when it also has keyed rules.
    fn locations(&self) -> Vec<&str> {
        if self.wildcard_prefix.is_some() {
            return Vec::new();
        }
        self.locations.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dreamfactory_layout() -> LayoutStrategy {
        LayoutStrategy::new()
            .location("plugin", "extensions/plugins")
            .location("app", "extensions/apps")
    }

    #[test]
    fn test_install_path_literal_convention() {
        let strategy = dreamfactory_layout();
        let pkg = PackageDescriptor::new("dreamfactory-app", "sample", "1.0.0");

        let path = strategy.install_path(&pkg, "dreamfactory").unwrap();
        assert_eq!(path, PathBuf::from("extensions/apps/sample"));
    }

    #[test]
    fn test_install_path_plugin() {
        let strategy = dreamfactory_layout();
        let pkg = PackageDescriptor::new("dreamfactory-plugin", "auditing", "1.0.0");

        let path = strategy.install_path(&pkg, "dreamfactory").unwrap();
        assert_eq!(path, PathBuf::from("extensions/plugins/auditing"));
    }

    #[test]
    fn test_install_path_unrecognized_location() {
        let strategy = dreamfactory_layout();
        let pkg = PackageDescriptor::new("dreamfactory-widget", "gauge", "1.0.0");

        let err = strategy.install_path(&pkg, "dreamfactory").unwrap_err();
        match err {
            PlacerError::UnrecognizedLocation { family, location } => {
                assert_eq!(family, "dreamfactory");
                assert_eq!(location, "widget");
            }
            other => panic!("expected UnrecognizedLocation, got {other:?}"),
        }
    }

    #[test]
    fn test_install_path_missing_location_suffix() {
        // A type string that is the bare family key carries no location.
        let strategy = dreamfactory_layout();
        let pkg = PackageDescriptor::new("dreamfactory", "core", "1.0.0");

        let err = strategy.install_path(&pkg, "dreamfactory").unwrap_err();
        assert!(matches!(err, PlacerError::UnrecognizedLocation { .. }));
    }

    #[test]
    fn test_wildcard_accepts_any_keyword() {
        let strategy = LayoutStrategy::wildcard("modules");
        let pkg = PackageDescriptor::new("acme-theme", "dark", "0.3.0");

        let path = strategy.install_path(&pkg, "acme").unwrap();
        assert_eq!(path, PathBuf::from("modules/theme/dark"));
        assert!(strategy.locations().is_empty());
    }

    #[test]
    fn test_wildcard_with_keyed_override() {
        let strategy = LayoutStrategy::wildcard("modules").location("plugin", "custom/plugins");
        let plugin = PackageDescriptor::new("acme-plugin", "auditing", "1.0.0");
        let theme = PackageDescriptor::new("acme-theme", "dark", "1.0.0");

        assert_eq!(
            strategy.install_path(&plugin, "acme").unwrap(),
            PathBuf::from("custom/plugins/auditing")
        );
        assert_eq!(
            strategy.install_path(&theme, "acme").unwrap(),
            PathBuf::from("modules/theme/dark")
        );
        // A wildcard layout accepts any keyword, so it enumerates none.
        assert!(strategy.locations().is_empty());
    }

    #[test]
    fn test_empty_layout_accepts_any_keyword_at_root() {
        let strategy = LayoutStrategy::new();
        let pkg = PackageDescriptor::new("acme-theme", "dark", "1.0.0");

        assert_eq!(
            strategy.install_path(&pkg, "acme").unwrap(),
            PathBuf::from("theme/dark")
        );
        assert!(strategy.locations().is_empty());
    }

    #[test]
    fn test_locations_enumerates_keywords() {
        let strategy = dreamfactory_layout();
        let mut locations = strategy.locations();
        locations.sort_unstable();
        assert_eq!(locations, vec!["app", "plugin"]);
    }
}
