//! Install lifecycle orchestration over the injected ports.

use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{PlacerError, Result};
use crate::family::FamilyRegistry;
use crate::package::PackageDescriptor;
use crate::ports::{Filesystem, InstalledRegistry, Reporter};
use crate::resolver::PathResolver;

/// Whether the registry currently lists a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageState {
    Installed,
    Uninstalled,
}

/// Orchestrates install and uninstall against the injected ports.
///
/// The installer owns no storage: disk mutation goes through
/// [`Filesystem`], the installed ledger through [`InstalledRegistry`], and
/// progress lines through [`Reporter`]. Calls are synchronous and run to
/// completion; a failed operation is reported once and must be reissued by
/// the host.
pub struct Installer<'a, F, R, P>
where
    F: Filesystem,
    R: InstalledRegistry,
    P: Reporter,
{
    resolver: PathResolver,
    install_root: PathBuf,
    fs: &'a F,
    registry: &'a R,
    reporter: &'a P,
}

impl<'a, F, R, P> Installer<'a, F, R, P>
where
    F: Filesystem,
    R: InstalledRegistry,
    P: Reporter,
{
    pub fn new(
        families: Arc<FamilyRegistry>,
        config: &Config,
        fs: &'a F,
        registry: &'a R,
        reporter: &'a P,
    ) -> Self {
        Self {
            resolver: PathResolver::new(families),
            install_root: config.install_root.clone(),
            fs,
            registry,
            reporter,
        }
    }

    /// True iff the type string names a registered family and one of its
    /// recognized locations. Pure query, no state change.
    pub fn supports(&self, type_name: &str) -> bool {
        self.resolver.supports_type(type_name)
    }

    /// Destination directory for `package` under the install root.
    ///
    /// Recomputed on every call; never cached.
    pub fn resolve_path(&self, package: &PackageDescriptor) -> Result<PathBuf> {
        Ok(self.install_root.join(self.resolver.resolve(package)?))
    }

    pub fn state(&self, package: &PackageDescriptor) -> PackageState {
        if self.registry.has_package(package) {
            PackageState::Installed
        } else {
            PackageState::Uninstalled
        }
    }

    /// Place the staged `artifact` at the package's resolved destination and
    /// record the package in the registry.
    ///
    /// Resolution errors are terminal for the call and leave both ports
    /// untouched. When placement fails partway, the partial destination is
    /// cleaned up best-effort and the package is never marked installed.
    pub fn install(&self, package: &PackageDescriptor, artifact: &Path) -> Result<PathBuf> {
        let dest = self.resolve_path(package)?;
        debug!("Installing {} -> {:?}", package, dest);

        if let Err(cause) = self.fs.place_artifact(artifact, &dest) {
            self.fs.remove_directory(&dest);
            self.reporter
                .line(&format!("Installing {} - failed", dest.display()));
            return Err(PlacerError::PlacementFailed { path: dest, cause });
        }

        self.registry.add_package(package);
        self.reporter
            .line(&format!("Installing {} - installed", dest.display()));
        Ok(dest)
    }

    /// Remove `package` from the registry, then delete its directory.
    ///
    /// The registry membership check comes first: a package that was never
    /// registered fails with [`PlacerError::NotInstalled`] before any
    /// filesystem call. The registry entry is removed before the directory
    /// is deleted; a failed deletion is reported and surfaced as
    /// [`PlacerError::DeletionFailed`] without rolling back the registry
    /// removal, leaving an orphaned directory the host reconciles through
    /// delete-if-exists semantics.
    pub fn uninstall(&self, package: &PackageDescriptor) -> Result<()> {
        if !self.registry.has_package(package) {
            return Err(PlacerError::NotInstalled {
                package: package.to_string(),
            });
        }

        self.registry.remove_package(package);

        let dest = self.resolve_path(package)?;
        debug!("Uninstalling {} from {:?}", package, dest);
        let deleted = self.fs.remove_directory(&dest);
        self.reporter.line(&format!(
            "Deleting {} - {}",
            dest.display(),
            if deleted { "deleted" } else { "not deleted" }
        ));

        if deleted {
            Ok(())
        } else {
            Err(PlacerError::DeletionFailed { path: dest })
        }
    }
}
