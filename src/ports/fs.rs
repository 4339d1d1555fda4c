//! Real filesystem port backed by std::fs.

use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::Filesystem;

/// [`Filesystem`] implementation that mutates the real disk.
pub struct RealFilesystem;

impl Filesystem for RealFilesystem {
    #[tracing::instrument(skip(self))]
    fn remove_directory(&self, path: &Path) -> bool {
        if !path.exists() {
            return true;
        }
        match fs::remove_dir_all(path) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to remove directory {:?}: {}", path, e);
                false
            }
        }
    }

    #[tracing::instrument(skip(self))]
    fn place_artifact(&self, source: &Path, dest: &Path) -> Result<()> {
        if source.is_dir() {
            copy_tree(source, dest)
        } else {
            if let Some(parent) = dest.parent()
                && !parent.exists()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
            fs::copy(source, dest)
                .with_context(|| format!("Failed to copy {:?} to {:?}", source, dest))?;
            Ok(())
        }
    }
}

fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.with_context(|| format!("Failed to walk {:?}", source))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .context("walked entry escaped the source root")?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory {:?}", target))?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {:?} to {:?}", entry.path(), target))?;
        }
    }
    Ok(())
}
