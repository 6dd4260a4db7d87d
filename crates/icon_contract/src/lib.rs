//! Runtime-agnostic icon contract shared by every icon renderer.
//!
//! This crate defines the presentation property bag accepted by icons, the closed set of
//! vector primitives an icon is built from, the shared wrapper that merges caller
//! properties over the container defaults, and the static definitions of each icon
//! variant. It does not depend on Leptos or browser APIs; `icon_ui` mounts the
//! [`IconNode`] values produced here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
mod node;
mod primitive;
mod properties;
mod variants;
mod wrapper;

pub use error::IconPropertiesError;
pub use node::{is_valid_attribute_name, Attribute, IconNode};
pub use primitive::{PathPrimitive, StrokeLinecap, VectorPrimitive};
pub use properties::{IconProperties, IconSize};
pub use variants::{comet, warp, IconDefinition, COMET, WARP};
pub use wrapper::{resolve_attributes, wrap, DEFAULT_ATTRIBUTES, DEFAULT_VIEW_BOX, SVG_NAMESPACE};
