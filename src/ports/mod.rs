//! Port traits the core consumes, and their stock implementations.
//!
//! The installer owns no storage and performs no I/O of its own; everything
//! flows through these three narrow interfaces, enabling dependency
//! injection and testability.
//!
//! # Structure
//!
//! - `fs` - Real filesystem port backed by std::fs
//! - `registry` - In-memory installed-package ledger with JSON persistence
//! - `report` - Progress reporting sinks

mod fs;
mod registry;
mod report;

pub use fs::RealFilesystem;
pub use registry::InMemoryRegistry;
pub use report::{ConsoleReporter, NullReporter};

use anyhow::Result;
use std::path::Path;

use crate::package::PackageDescriptor;

/// All disk mutation the installer performs goes through this port.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Recursively delete `path` and everything under it.
    ///
    /// Delete-if-exists: a missing directory counts as deleted. Returns
    /// whether the directory is gone afterwards.
    fn remove_directory(&self, path: &Path) -> bool;

    /// Copy the staged artifact at `source` (a file or a directory tree) to
    /// `dest`, creating parent directories as needed.
    fn place_artifact(&self, source: &Path, dest: &Path) -> Result<()>;
}

/// Ledger of installed packages.
///
/// The core queries and mutates the ledger but does not own its storage;
/// hosts with their own installed-package bookkeeping implement this
/// directly.
#[cfg_attr(test, mockall::automock)]
pub trait InstalledRegistry: Send + Sync {
    fn has_package(&self, package: &PackageDescriptor) -> bool;
    fn add_package(&self, package: &PackageDescriptor);
    fn remove_package(&self, package: &PackageDescriptor);
}

/// Sink for human-readable progress lines.
///
/// Purely observational; never consulted for control flow.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn line(&self, message: &str);
}
