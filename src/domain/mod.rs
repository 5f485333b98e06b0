//! Domain logic - pure version rules independent of where versions are stored

pub mod version;

pub use version::{bump, component, parse, resolve_next, Component, Directive, Increment, Version};
