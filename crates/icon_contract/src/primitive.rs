//! Closed set of vector shapes an icon is composed from.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Stroke end-cap style for an individual path.
pub enum StrokeLinecap {
    /// Flat cap ending exactly at the path end.
    Butt,
    /// Rounded cap.
    Round,
    /// Square cap extending past the path end.
    Square,
}

impl StrokeLinecap {
    /// Attribute value written for the cap style.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// A path primitive with optional per-path presentation overrides.
pub struct PathPrimitive {
    /// Path geometry (`d` attribute).
    pub d: &'static str,
    /// Optional stroke cap override.
    pub stroke_linecap: Option<StrokeLinecap>,
    /// Optional opacity override.
    pub opacity: Option<f32>,
}

impl PathPrimitive {
    /// Creates a path with no presentation overrides.
    pub const fn new(d: &'static str) -> Self {
        Self {
            d,
            stroke_linecap: None,
            opacity: None,
        }
    }

    /// Returns the path with a stroke cap override.
    pub const fn stroke_linecap(self, cap: StrokeLinecap) -> Self {
        Self {
            stroke_linecap: Some(cap),
            ..self
        }
    }

    /// Returns the path with an opacity override.
    pub const fn opacity(self, opacity: f32) -> Self {
        Self {
            opacity: Some(opacity),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
/// One static shape rendered inside an icon container.
pub enum VectorPrimitive {
    /// Circle centered at (`cx`, `cy`).
    Circle {
        /// Center x coordinate.
        cx: f32,
        /// Center y coordinate.
        cy: f32,
        /// Radius.
        r: f32,
    },
    /// Arbitrary path geometry.
    Path(PathPrimitive),
}

impl VectorPrimitive {
    /// Element tag used when the primitive is written as markup.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Path(_) => "path",
        }
    }

    /// Element attributes in emission order.
    ///
    /// Numbers use their shortest round-trip form, so `16.0` is written as `16`.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Circle { cx, cy, r } => vec![
                ("cx", cx.to_string()),
                ("cy", cy.to_string()),
                ("r", r.to_string()),
            ],
            Self::Path(path) => {
                let mut attributes = vec![("d", path.d.to_string())];
                if let Some(cap) = path.stroke_linecap {
                    attributes.push(("stroke-linecap", cap.token().to_string()));
                }
                if let Some(opacity) = path.opacity {
                    attributes.push(("opacity", opacity.to_string()));
                }
                attributes
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn circle_attributes_use_shortest_number_form() {
        let circle = VectorPrimitive::Circle {
            cx: 16.0,
            cy: 8.0,
            r: 3.0,
        };

        assert_eq!(circle.tag(), "circle");
        assert_eq!(
            circle.attributes(),
            vec![
                ("cx", "16".to_string()),
                ("cy", "8".to_string()),
                ("r", "3".to_string()),
            ]
        );
    }

    #[test]
    fn path_overrides_follow_geometry() {
        let path = VectorPrimitive::Path(
            PathPrimitive::new("M0 0L1 1")
                .opacity(0.6)
                .stroke_linecap(StrokeLinecap::Round),
        );

        assert_eq!(path.tag(), "path");
        assert_eq!(
            path.attributes(),
            vec![
                ("d", "M0 0L1 1".to_string()),
                ("stroke-linecap", "round".to_string()),
                ("opacity", "0.6".to_string()),
            ]
        );
    }

    #[test]
    fn bare_path_has_only_geometry() {
        let path = VectorPrimitive::Path(PathPrimitive::new("M4 4Z"));
        assert_eq!(path.attributes(), vec![("d", "M4 4Z".to_string())]);
    }
}
