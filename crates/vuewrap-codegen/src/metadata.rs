//! Component metadata consumed by the generator.
//!
//! These types describe a custom element the way the metadata source hands it
//! over: a tag name plus ordered lists of properties, events and methods. They
//! are never mutated once built.

use serde::{Deserialize, Serialize};

use crate::naming::to_pascal_case;

/// Type names that carry no static type information.
const UNTYPED: [&str; 2] = ["unknown", "any"];

/// Everything the generator needs to know about one custom element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// Kebab-case tag name (e.g., "my-button")
    #[serde(alias = "tagName")]
    pub tag: String,

    /// Bindable properties, in declaration order
    #[serde(default, alias = "properties")]
    pub props: Vec<Property>,

    /// Events the element dispatches, in declaration order
    #[serde(default)]
    pub events: Vec<Event>,

    /// Imperative methods exposed on the element
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl ComponentMetadata {
    /// Create metadata for a tag with no members.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: Vec::new(),
            events: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add a property.
    pub fn with_prop(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.props.push(Property::new(name, ty));
        self
    }

    /// Add an event.
    pub fn with_event(mut self, name: impl Into<String>) -> Self {
        self.events.push(Event::new(name));
        self
    }

    /// Add a method.
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(Method::new(name));
        self
    }

    /// PascalCase class name derived from the tag.
    pub fn class_name(&self) -> String {
        to_pascal_case(&self.tag)
    }

    /// Look up a property by name. The first declaration wins on duplicates.
    pub fn prop(&self, name: &str) -> Option<&Property> {
        self.props.iter().find(|p| p.name == name)
    }

    /// Look up an event by name. The first declaration wins on duplicates.
    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.name == name)
    }
}

/// A bindable property of a custom element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,

    /// Type name, or "unknown"/"any" when no static type is available
    #[serde(default = "default_type", rename = "type")]
    pub ty: String,
}

fn default_type() -> String {
    "unknown".to_string()
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Resolve the declared type into the form used by emitted code.
    pub fn value_type(&self) -> ValueType {
        if UNTYPED.contains(&self.ty.as_str()) {
            ValueType::Any
        } else {
            ValueType::Named {
                declared: self.ty.clone(),
                constructor: to_pascal_case(&self.ty),
            }
        }
    }
}

/// An event dispatched by a custom element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An imperative method exposed by a custom element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Effective type of a property in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    /// No static type: field is `any`, no runtime constraint
    Any,

    /// Concrete type with its runtime constructor name
    Named {
        /// Type as declared, used for the field annotation
        declared: String,
        /// PascalCase form used as the runtime type constraint
        constructor: String,
    },
}

impl ValueType {
    /// Static type annotation for the field.
    pub fn annotation(&self) -> &str {
        match self {
            ValueType::Any => "any",
            ValueType::Named { declared, .. } => declared.as_str(),
        }
    }

    /// Runtime type constraint, if any.
    pub fn constructor(&self) -> Option<&str> {
        match self {
            ValueType::Any => None,
            ValueType::Named { constructor, .. } => Some(constructor.as_str()),
        }
    }
}

/// Names the property/event pair used for two-way binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(alias = "propName")]
    pub prop: String,

    #[serde(alias = "eventName")]
    pub event: String,
}

impl ModelConfig {
    pub fn new(prop: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            event: event.into(),
        }
    }

    /// Resolve both names against the component.
    ///
    /// Returns `None` when either the property or the event is missing.
    pub fn resolve<'a>(&self, component: &'a ComponentMetadata) -> Option<ResolvedModel<'a>> {
        let prop = component.prop(&self.prop)?;
        let event = component.event(&self.event)?;
        Some(ResolvedModel { prop, event })
    }
}

/// A model configuration whose property and event both exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedModel<'a> {
    pub prop: &'a Property,
    pub event: &'a Event,
}
