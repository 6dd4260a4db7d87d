//! Leptos icon components built on the shared icon contract.
//!
//! The crate mounts [`icon_contract::IconNode`] values as inline SVG. `IconWrapper` is the
//! shared container every icon renders through; `Comet` and `Warp` forward their
//! properties to it unchanged together with their static primitive lists.
//!
//! Browser builds use the default `csr` feature. Server rendering builds with
//! `--no-default-features --features ssr`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod variants;

pub use icon::IconWrapper;
pub use icon_contract::{IconProperties, IconSize};
pub use variants::{Comet, Warp};

/// Convenience imports for crates rendering icons.
pub mod prelude {
    pub use crate::{Comet, IconProperties, IconSize, IconWrapper, Warp};
}
