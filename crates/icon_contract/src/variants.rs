//! Static icon definitions.

use crate::{wrap, IconNode, IconProperties, PathPrimitive, StrokeLinecap, VectorPrimitive};

#[derive(Debug, Clone, Copy, PartialEq)]
/// A named icon: a fixed primitive sequence rendered through the shared wrapper.
pub struct IconDefinition {
    name: &'static str,
    primitives: &'static [VectorPrimitive],
}

impl IconDefinition {
    /// Creates an icon definition.
    pub const fn new(name: &'static str, primitives: &'static [VectorPrimitive]) -> Self {
        Self { name, primitives }
    }

    /// Stable icon name, for debugging and logs. It is not written to the rendered node.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Authored primitives in render order.
    pub const fn primitives(&self) -> &'static [VectorPrimitive] {
        self.primitives
    }

    /// Renders the icon. Properties are forwarded to [`wrap`] untouched.
    pub fn render(&self, properties: &IconProperties) -> IconNode {
        wrap(properties, self.primitives)
    }
}

/// Comet: a head with a sweeping tail and a faint dashed trail.
pub const COMET: IconDefinition = IconDefinition::new(
    "comet",
    &[
        VectorPrimitive::Circle {
            cx: 16.0,
            cy: 8.0,
            r: 3.0,
        },
        VectorPrimitive::Path(PathPrimitive::new(
            "M13.5 9.5C11 12 8.5 14 6 15.5C3.5 17 2 17.5 2 17.5C2 17.5 2.5 16 4 13.5C5.5 11 7.5 8.5 10 6C12.5 3.5 15 2 17 2C19 2 19.5 3.5 18 6C17.5 6.8 17 7.5 16.5 8",
        )),
        VectorPrimitive::Path(
            PathPrimitive::new("M7 17C7.5 16.5 8 16 8.5 15.5M10 14C10.5 13.5 11 13 11.5 12.5")
                .stroke_linecap(StrokeLinecap::Round)
                .opacity(0.6),
        ),
    ],
);

/// Warp: a stylized W under a rounded bar.
pub const WARP: IconDefinition = IconDefinition::new(
    "warp",
    &[
        VectorPrimitive::Path(PathPrimitive::new(
            "M2 6.5L5.5 6.5L8 17.5L10 10.5L12 13.5L14 10.5L16 17.5L18.5 6.5L22 6.5L18 19.5L15.5 19.5L14 14L12.5 16.5L11 14L9.5 19.5L6 19.5L2 6.5Z",
        )),
        VectorPrimitive::Path(PathPrimitive::new(
            "M4 4C4 3.44772 4.44772 3 5 3L19 3C19.5523 3 20 3.44772 20 4C20 4.55228 19.5523 5 19 5L5 5C4.44772 5 4 4.55228 4 4Z",
        )),
    ],
);

/// Renders the [`COMET`] icon.
pub fn comet(properties: &IconProperties) -> IconNode {
    COMET.render(properties)
}

/// Renders the [`WARP`] icon.
pub fn warp(properties: &IconProperties) -> IconNode {
    WARP.render(properties)
}
