//! Platform-specific implementations of the storage port.

mod desktop;

pub use desktop::{create_platform, DesktopStorageProvider};
