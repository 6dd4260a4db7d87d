//! Rendered icon container and its SVG markup form.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::VectorPrimitive;

/// Returns whether `name` is an XML name the DOM accepts as an attribute name.
///
/// The first character must be a letter, `_` or `:`; the rest may also be digits, `-`
/// or `.`. Names are otherwise uninterpreted.
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || matches!(first, '_' | ':'))
        && chars.all(|ch| ch.is_alphanumeric() || matches!(ch, '-' | '.' | '_' | ':'))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
/// One container attribute.
pub struct Attribute {
    /// Attribute name.
    pub name: Cow<'static, str>,
    /// Attribute value, uninterpreted.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute.
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A rendered icon: one vector-graphics container holding its primitives in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconNode {
    attributes: Vec<Attribute>,
    children: Vec<VectorPrimitive>,
}

impl IconNode {
    pub(crate) fn new(attributes: Vec<Attribute>, children: &[VectorPrimitive]) -> Self {
        Self {
            attributes,
            children: children.to_vec(),
        }
    }

    /// Container attributes in emission order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Looks up a container attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name() == name)
            .map(Attribute::value)
    }

    /// Child primitives in render order.
    pub fn children(&self) -> &[VectorPrimitive] {
        &self.children
    }

    /// SVG markup for the children only, suitable for a container's inner HTML.
    pub fn children_markup(&self) -> String {
        Children(&self.children).to_string()
    }

    /// Full SVG markup for the container and its children.
    ///
    /// Attributes whose names fail [`is_valid_attribute_name`] are left out.
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IconNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<svg")?;
        for attribute in &self.attributes {
            if is_valid_attribute_name(attribute.name()) {
                write_attribute(f, attribute.name(), attribute.value())?;
            }
        }
        write!(f, ">{}</svg>", Children(&self.children))
    }
}

struct Children<'a>(&'a [VectorPrimitive]);

impl fmt::Display for Children<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in self.0 {
            write_primitive(f, child)?;
        }
        Ok(())
    }
}

fn write_primitive(out: &mut impl fmt::Write, primitive: &VectorPrimitive) -> fmt::Result {
    write!(out, "<{}", primitive.tag())?;
    for (name, value) in primitive.attributes() {
        write_attribute(out, name, &value)?;
    }
    out.write_str("/>")
}

fn write_attribute(out: &mut impl fmt::Write, name: &str, value: &str) -> fmt::Result {
    write!(out, " {name}=\"")?;
    for ch in value.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            _ => out.write_char(ch)?,
        }
    }
    out.write_char('"')
}
