//! Package descriptor handed to the core by the host.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Host-supplied description of the package a lifecycle call operates on.
///
/// Immutable once handed to the core; the host creates one per operation and
/// discards it afterwards. `metadata` is opaque to the core and passed
/// through to location strategies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PackageDescriptor {
    /// Namespaced type string, e.g. `dreamfactory-plugin`.
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl PackageDescriptor {
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            version: version.into(),
            metadata: Map::new(),
        }
    }

    /// Ledger identity: `name@version`, or just the name when unversioned.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PackageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}@{}", self.name, self.version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_includes_version() {
        let pkg = PackageDescriptor::new("dreamfactory-plugin", "auditing", "2.1.0");
        assert_eq!(pkg.id(), "auditing@2.1.0");
    }

    #[test]
    fn test_id_without_version() {
        let pkg = PackageDescriptor::new("dreamfactory-app", "sample", "");
        assert_eq!(pkg.id(), "sample");
    }

    #[test]
    fn test_type_field_rename() {
        let json = r#"{"type": "dreamfactory-app", "name": "sample", "version": "1.0.0"}"#;
        let pkg: PackageDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(pkg.type_name, "dreamfactory-app");
        assert_eq!(pkg.name, "sample");
    }
}
