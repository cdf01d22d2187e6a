//! Third card - three hidden messages that must all be opened.
//!
//! The "my message" button stays disabled until every tile is revealed.

use dioxus::prelude::*;
use heartnote_ui::{Button, ButtonVariant, Glyph, Icon};

use super::advance;
use crate::components::RevealTile;
use crate::context::{use_content, use_flow};

#[component]
pub fn RevealCard() -> Element {
    let mut flow = use_flow();
    let content = use_content();
    let reveal = &content.reveal;

    let slots = flow
        .read()
        .reveal_state()
        .map(|state| state.slots())
        .unwrap_or_default();
    let can_advance = flow.read().can_advance();

    rsx! {
        h2 { class: "card-title script small", "{reveal.title}" }
        p { class: "card-hint", "{reveal.hint}" }

        div { class: "reveal-list",
            for (idx, message) in reveal.messages.iter().enumerate() {
                RevealTile {
                    key: "{idx}",
                    message: message.clone(),
                    revealed: slots[idx],
                    onreveal: move |_| {
                        if let Err(e) = flow.write().reveal(idx) {
                            tracing::warn!("Reveal {} failed: {}", idx, e);
                        }
                    },
                }
            }
        }

        Button {
            variant: ButtonVariant::Rose,
            disabled: !can_advance,
            onclick: move |_| advance(flow),
            "{reveal.button_label}"
            Icon { glyph: Glyph::ArrowRight }
        }
    }
}
