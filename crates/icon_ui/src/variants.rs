use icon_contract::{IconProperties, COMET, WARP};
use leptos::*;

use crate::IconWrapper;

#[component]
/// Comet icon.
pub fn Comet(#[prop(optional)] properties: IconProperties) -> impl IntoView {
    view! { <IconWrapper properties primitives=COMET.primitives() /> }
}

#[component]
/// Warp icon.
pub fn Warp(#[prop(optional)] properties: IconProperties) -> impl IntoView {
    view! { <IconWrapper properties primitives=WARP.primitives() /> }
}
