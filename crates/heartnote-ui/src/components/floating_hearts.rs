//! Floating Hearts Background
//!
//! Hearts drifting up the page on an endless CSS loop. The layout comes in
//! pre-generated; this component only draws it.

use dioxus::prelude::*;
use heartnote_core::HeartField;

use super::icon::{Glyph, Icon};

/// Renders every heart of `field` as a fixed, click-through layer
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FloatingHearts { field: HeartField::seeded(15, 7) }
/// }
/// ```
#[component]
pub fn FloatingHearts(field: HeartField) -> Element {
    rsx! {
        div { class: "floating-hearts", "aria-hidden": "true",
            for (i, heart) in field.hearts().iter().enumerate() {
                div {
                    key: "{i}",
                    class: "floating-heart",
                    style: "{heart.style()}",
                    Icon { glyph: Glyph::Heart, size: heart.size_px.round() as u32, filled: true }
                }
            }
        }
    }
}
