//! In-memory installed-package ledger with JSON persistence helpers.

use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use super::InstalledRegistry;
use crate::package::PackageDescriptor;

/// [`InstalledRegistry`] backed by a mutex-guarded map of package ids.
///
/// Covers embedded use and tests; hosts with their own ledger implement the
/// port directly. The ledger can be persisted between runs as a JSON file
/// via [`InMemoryRegistry::save_to`] and [`InMemoryRegistry::load_from`] --
/// persistence lives outside the port surface so the core never writes the
/// ledger itself.
#[derive(Default)]
pub struct InMemoryRegistry {
    packages: Mutex<BTreeMap<String, PackageDescriptor>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ledger previously written by [`InMemoryRegistry::save_to`].
    ///
    /// A missing file yields an empty ledger.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No ledger at {:?}, starting empty", path);
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ledger from {:?}", path))?;
        let entries: Vec<PackageDescriptor> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse ledger at {:?}", path))?;
        let packages = entries.into_iter().map(|p| (p.id(), p)).collect();
        Ok(Self {
            packages: Mutex::new(packages),
        })
    }

    /// Write the ledger to `path` as pretty-printed JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        let entries: Vec<PackageDescriptor> =
            self.packages.lock().unwrap().values().cloned().collect();
        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(path, content).with_context(|| format!("Failed to save ledger to {:?}", path))
    }

    /// Currently installed packages, ordered by id.
    pub fn snapshot(&self) -> Vec<PackageDescriptor> {
        self.packages.lock().unwrap().values().cloned().collect()
    }
}

impl InstalledRegistry for InMemoryRegistry {
    fn has_package(&self, package: &PackageDescriptor) -> bool {
        self.packages.lock().unwrap().contains_key(&package.id())
    }

    fn add_package(&self, package: &PackageDescriptor) {
        self.packages
            .lock()
            .unwrap()
            .insert(package.id(), package.clone());
    }

    fn remove_package(&self, package: &PackageDescriptor) {
        self.packages.lock().unwrap().remove(&package.id());
    }
}
