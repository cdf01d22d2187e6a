//! Second card - the admission.

use dioxus::prelude::*;
use heartnote_ui::{Button, ButtonVariant, Glyph, Icon};

use super::advance;
use crate::context::{use_content, use_flow};

#[component]
pub fn SadnessCard() -> Element {
    let flow = use_flow();
    let content = use_content();
    let sadness = &content.sadness;

    rsx! {
        div { class: "card-hero hero-purple",
            div { class: "hero-image",
                img { src: "{sadness.image.src}", alt: "{sadness.image.alt}" }
            }
        }

        p { class: "card-body emphasis", "{sadness.body}" }

        Button {
            variant: ButtonVariant::Lilac,
            onclick: move |_| advance(flow),
            "{sadness.button_label}"
            Icon { glyph: Glyph::ArrowRight }
        }
    }
}
