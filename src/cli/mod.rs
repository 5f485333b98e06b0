//! Commands exposed by the binary, decoupled from argument parsing

pub mod version;

pub use version::{VersionArgs, VersionCommand};
