//! Shared icon container: default presentation attributes and the property merge.

use std::borrow::Cow;

use crate::{Attribute, IconNode, IconProperties, VectorPrimitive};

/// SVG namespace written on every container.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Coordinate space every icon's primitives are authored in.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Container defaults in emission order.
pub const DEFAULT_ATTRIBUTES: &[(&str, &str)] = &[
    ("xmlns", SVG_NAMESPACE),
    ("viewBox", DEFAULT_VIEW_BOX),
    ("width", "24"),
    ("height", "24"),
    ("fill", "none"),
    ("stroke", "currentColor"),
    ("stroke-width", "1.5"),
    ("stroke-linejoin", "round"),
    ("aria-hidden", "true"),
    ("focusable", "false"),
];

/// Ordered attribute list where setting an existing name replaces its value in place.
struct AttributeSet(Vec<Attribute>);

impl AttributeSet {
    fn defaults() -> Self {
        Self(
            DEFAULT_ATTRIBUTES
                .iter()
                .map(|(name, value)| Attribute::new(*name, *value))
                .collect(),
        )
    }

    fn set(&mut self, name: impl Into<Cow<'static, str>>, value: &str) {
        let name = name.into();
        match self.0.iter_mut().find(|attribute| attribute.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => self.0.push(Attribute::new(name, value)),
        }
    }

    fn remove(&mut self, name: &str) {
        self.0.retain(|attribute| attribute.name != name);
    }
}

/// Merges caller properties over the container defaults.
///
/// Typed fields map onto their attributes first (`size` onto `width` and `height`,
/// `color` onto `stroke`, `stroke_width` onto `stroke-width`, `aria_label` onto
/// `aria-label` plus `role="img"` in place of `aria-hidden`, `class` onto `class`).
/// Pass-through attributes are applied last, in caller order, and win every
/// collision. A colliding name keeps the position of the attribute it replaces;
/// new names are appended. Values are never interpreted.
pub fn resolve_attributes(properties: &IconProperties) -> Vec<Attribute> {
    let mut set = AttributeSet::defaults();

    if let Some(size) = properties.size {
        let px = size.px().to_string();
        set.set("width", &px);
        set.set("height", &px);
    }
    if let Some(color) = &properties.color {
        set.set("stroke", color);
    }
    if let Some(width) = &properties.stroke_width {
        set.set("stroke-width", width);
    }
    if let Some(label) = &properties.aria_label {
        set.remove("aria-hidden");
        set.set("role", "img");
        set.set("aria-label", label);
    }
    if let Some(class) = &properties.class {
        set.set("class", class);
    }
    for (name, value) in &properties.attributes {
        set.set(name.clone(), value);
    }

    set.0
}

/// Renders `children` inside a container configured by `properties`.
///
/// Children are copied in order and never modified.
pub fn wrap(properties: &IconProperties, children: &[VectorPrimitive]) -> IconNode {
    IconNode::new(resolve_attributes(properties), children)
}
