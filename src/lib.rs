pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod provider;
pub mod ui;

pub use error::{Result, VersionctlError};
