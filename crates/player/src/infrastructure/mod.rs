//! Infrastructure adapters - concrete implementations of the ports.

pub mod messaging;
pub mod platform;
pub mod testing;

pub use platform::create_platform;
