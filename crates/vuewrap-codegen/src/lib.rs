//! Vue wrapper class generation for custom elements.
//!
//! This crate turns the metadata of a custom element (tag, properties, events,
//! methods) into the source of a `vue-property-decorator` class that mounts
//! the element and exposes it with Vue-native bindings. Every function here is
//! pure: the same metadata always yields the same lines.

pub mod composer;
pub mod config;
pub mod events;
pub mod fragment;
pub mod metadata;
pub mod methods;
pub mod model;
pub mod naming;
pub mod props;
pub mod render;

pub use composer::{generate_component, Composer};
pub use config::EmitConfig;
pub use fragment::{flatten, Fragment, GeneratedLines};
pub use metadata::{
    ComponentMetadata, Event, Method, ModelConfig, Property, ResolvedModel, ValueType,
};
pub use naming::{element_interface, indent, to_pascal_case};
