//! Generates and writes Vue wrapper modules for a custom element library.
//!
//! Drives the code generator over every component in a manifest, applying
//! exclusions and per-tag model bindings, and writes one module per component
//! plus an optional index.

pub mod generator;
pub mod index;
pub mod watcher;

pub use generator::{BuildError, BuildResult, GeneratedFile, OutputConfig, ProxyGenerator};
pub use index::generate_index;
pub use watcher::{FileWatcher, WatchEvent};
