//! A tappable tile hiding one message behind a heart.

use dioxus::prelude::*;
use heartnote_core::RevealMessage;
use heartnote_ui::{Glyph, Icon};

#[component]
pub fn RevealTile(
    message: RevealMessage,
    /// Whether the message has been opened
    revealed: bool,
    /// Called on every tap; revealing twice is harmless
    onreveal: EventHandler<()>,
) -> Element {
    let state = if revealed { "revealed" } else { "hidden" };

    rsx! {
        div {
            class: "reveal-tile {message.tint.class()} {state}",
            role: "button",
            "aria-pressed": "{revealed}",
            onclick: move |_| onreveal.call(()),
            div { class: "tile-cover",
                Icon { glyph: Glyph::Heart, size: 24, filled: true }
            }
            div { class: "tile-message",
                p { "{message.text}" }
            }
        }
    }
}
