//! Install root configuration.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the default install root.
pub const ROOT_ENV: &str = "PLACER_ROOT";

/// Where repository-relative resolved paths are anchored.
///
/// Resolution order: explicit value, then [`ROOT_ENV`], then `~/.placer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub install_root: PathBuf,
}

impl Config {
    pub fn new(install_root: Option<PathBuf>) -> Result<Self> {
        let install_root = match install_root {
            Some(root) => root,
            None => match env::var_os(ROOT_ENV) {
                Some(root) => PathBuf::from(root),
                None => dirs::home_dir()
                    .context("Could not determine home directory")?
                    .join(".placer"),
            },
        };
        Ok(Self { install_root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root_wins() {
        let config = Config::new(Some(PathBuf::from("/srv/repo"))).unwrap();
        assert_eq!(config.install_root, PathBuf::from("/srv/repo"));
    }

    // Single test for both env-dependent cases; parallel tests must not race
    // on ROOT_ENV.
    #[test]
    fn test_env_root_resolution() {
        unsafe {
            env::set_var(ROOT_ENV, "/srv/from-env");
        }
        let from_env = Config::new(None).unwrap();
        let explicit = Config::new(Some(PathBuf::from("/srv/explicit"))).unwrap();
        unsafe {
            env::remove_var(ROOT_ENV);
        }

        assert_eq!(from_env.install_root, PathBuf::from("/srv/from-env"));
        assert_eq!(explicit.install_root, PathBuf::from("/srv/explicit"));
    }
}
