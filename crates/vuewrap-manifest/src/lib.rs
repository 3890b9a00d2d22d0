//! Custom element manifest loading.
//!
//! Reads component metadata from JSON or YAML manifests and checks that every
//! tag is a usable custom element name before it reaches the generator.

pub mod format;
pub mod parser;
pub mod tag;

pub use format::ManifestFormat;
pub use parser::{load_manifest, load_manifests, parse_manifest, Manifest, ManifestError};
pub use tag::is_valid_tag;
