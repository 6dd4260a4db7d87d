//! Caller-supplied presentation properties for icons.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::IconPropertiesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Icon sizes, either a standard token or an explicit pixel count.
pub enum IconSize {
    /// 14px compact icon.
    Xs,
    /// 16px standard icon.
    Sm,
    /// 20px medium icon.
    Md,
    /// 24px large icon, the container's native size.
    Lg,
    /// Explicit pixel size.
    Px(u16),
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Px(px) => px,
        }
    }

    /// Stable size token; explicit sizes are written as `<n>px`.
    pub fn token(self) -> Cow<'static, str> {
        match self {
            Self::Xs => Cow::Borrowed("xs"),
            Self::Sm => Cow::Borrowed("sm"),
            Self::Md => Cow::Borrowed("md"),
            Self::Lg => Cow::Borrowed("lg"),
            Self::Px(px) => Cow::Owned(format!("{px}px")),
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl FromStr for IconSize {
    type Err = IconPropertiesError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim().to_ascii_lowercase();
        match token.as_str() {
            "xs" => Ok(Self::Xs),
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            other => other
                .strip_suffix("px")
                .unwrap_or(other)
                .parse::<u16>()
                .ok()
                .filter(|px| *px > 0)
                .map(Self::Px)
                .ok_or_else(|| IconPropertiesError::InvalidSize(raw.to_string())),
        }
    }
}

impl TryFrom<String> for IconSize {
    type Error = IconPropertiesError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<IconSize> for String {
    fn from(size: IconSize) -> Self {
        size.token().into_owned()
    }
}

/// Presentation properties accepted by every icon.
///
/// Every field is optional. Unset fields leave the wrapper defaults in place; see
/// [`crate::resolve_attributes`] for how each field maps onto container attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconProperties {
    /// Rendered width and height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<IconSize>,
    /// Stroke paint, replacing the inherited `currentColor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stroke width, passed through uninterpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<String>,
    /// Accessible label; labelled icons are exposed as images instead of hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    /// CSS class hook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Arbitrary attributes forwarded to the container in caller order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
}

impl IconProperties {
    /// Creates an empty property bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a property bag from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IconPropertiesError::Json`] when the input is not a valid property bag,
    /// including when a `size` token does not parse.
    pub fn from_json(raw: &str) -> Result<Self, IconPropertiesError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Sets the rendered size.
    pub fn size(mut self, size: IconSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the stroke paint.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the stroke width.
    pub fn stroke_width(mut self, width: impl Into<String>) -> Self {
        self.stroke_width = Some(width.into());
        self
    }

    /// Sets the accessible label.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Sets the CSS class hook.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Appends a pass-through attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn size_tokens_parse_case_insensitively() {
        assert_eq!("xs".parse::<IconSize>().unwrap(), IconSize::Xs);
        assert_eq!(" SM ".parse::<IconSize>().unwrap(), IconSize::Sm);
        assert_eq!("Md".parse::<IconSize>().unwrap(), IconSize::Md);
        assert_eq!("lg".parse::<IconSize>().unwrap(), IconSize::Lg);
    }

    #[test]
    fn explicit_pixel_sizes_accept_optional_suffix() {
        assert_eq!("18".parse::<IconSize>().unwrap(), IconSize::Px(18));
        assert_eq!("32px".parse::<IconSize>().unwrap(), IconSize::Px(32));
        assert_eq!(IconSize::Px(32).px(), 32);
        assert_eq!(IconSize::Px(32).to_string(), "32px");
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        for raw in ["", "huge", "0", "-4", "12em", "70000"] {
            let err = raw.parse::<IconSize>().unwrap_err();
            assert!(
                matches!(err, IconPropertiesError::InvalidSize(ref value) if value == raw),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }

    #[test]
    fn builder_collects_fields_and_attributes_in_order() {
        let props = IconProperties::new()
            .size(IconSize::Md)
            .color("red")
            .attribute("data-slot", "tray")
            .attribute("id", "comet");

        assert_eq!(props.size, Some(IconSize::Md));
        assert_eq!(props.color.as_deref(), Some("red"));
        assert_eq!(
            props.attributes,
            vec![
                ("data-slot".to_string(), "tray".to_string()),
                ("id".to_string(), "comet".to_string()),
            ]
        );
    }

    #[test]
    fn from_json_reads_partial_property_bags() {
        let props = IconProperties::from_json(
            r#"{"size":"md","color":"red","attributes":[["data-slot","tray"]]}"#,
        )
        .expect("valid properties");

        assert_eq!(
            props,
            IconProperties::new()
                .size(IconSize::Md)
                .color("red")
                .attribute("data-slot", "tray")
        );
        assert_eq!(
            IconProperties::from_json("{}").expect("empty"),
            IconProperties::default()
        );
    }

    #[test]
    fn from_json_reports_bad_sizes() {
        let err = IconProperties::from_json(r#"{"size":"enormous"}"#).unwrap_err();
        assert!(matches!(err, IconPropertiesError::Json(_)));
        assert!(err.to_string().contains("enormous"));
    }

    #[test]
    fn serialization_omits_unset_fields() {
        let props = IconProperties::new().size(IconSize::Px(18)).aria_label("Warp");
        let json = serde_json::to_string(&props).expect("serialize");

        assert_eq!(json, r#"{"size":"18px","aria_label":"Warp"}"#);
        assert_eq!(IconProperties::from_json(&json).expect("round trip"), props);
    }
}
