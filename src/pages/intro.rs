//! Opening card - "Hey Cutiepie".

use dioxus::prelude::*;
use heartnote_ui::{Button, ButtonVariant, Glyph, Icon};

use super::advance;
use crate::context::{use_content, use_flow};

#[component]
pub fn IntroCard() -> Element {
    let flow = use_flow();
    let content = use_content();
    let intro = &content.intro;

    rsx! {
        div { class: "card-hero hero-pink",
            span { class: "hero-deco hero-deco-left", Icon { glyph: Glyph::Sparkles } }
            span { class: "hero-deco hero-deco-right", Icon { glyph: Glyph::Heart, size: 12, filled: true } }
            div { class: "hero-image",
                img { src: "{intro.image.src}", alt: "{intro.image.alt}" }
            }
        }

        h1 { class: "card-title script", "{intro.title}" }
        p { class: "card-body", "{intro.body}" }

        Button {
            variant: ButtonVariant::Blush,
            onclick: move |_| advance(flow),
            "{intro.button_label}"
            Icon { glyph: Glyph::Heart, filled: true }
        }
    }
}
