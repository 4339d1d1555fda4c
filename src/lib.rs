pub mod config;
pub mod error;
pub mod family;
pub mod installer;
pub mod package;
pub mod ports;
pub mod resolver;

pub use config::Config;
pub use error::{PlacerError, Result};
pub use family::{FamilyRegistry, FamilyRegistryBuilder, LayoutStrategy, LocationStrategy};
pub use installer::{Installer, PackageState};
pub use package::PackageDescriptor;
pub use ports::{Filesystem, InstalledRegistry, Reporter};
pub use resolver::PathResolver;
