//! Final card - two portraits and the button that slides the letter up.

use dioxus::prelude::*;
use heartnote_core::CloseTrigger;
use heartnote_ui::{Button, ButtonVariant};

use crate::components::LetterOverlay;
use crate::context::{use_content, use_flow};

const PORTRAIT_CLASSES: [&str; 2] = ["portrait portrait-purple", "portrait portrait-pink"];

#[component]
pub fn FinaleCard() -> Element {
    let mut flow = use_flow();
    let content = use_content();
    let finale = &content.finale;

    let letter_open = flow.read().letter().is_some_and(|letter| letter.is_open());

    let close = move |trigger: CloseTrigger| {
        if let Err(e) = flow.write().close_letter(trigger) {
            tracing::warn!("Closing letter failed: {}", e);
        }
    };

    rsx! {
        h2 { class: "card-title script", "{finale.title}" }

        div { class: "portraits",
            for (i, portrait) in finale.portraits.iter().enumerate() {
                div { key: "{i}", class: "{PORTRAIT_CLASSES[i]}",
                    img { src: "{portrait.src}", alt: "{portrait.alt}" }
                }
            }
        }

        p { class: "card-hint", "{finale.hint}" }

        Button {
            variant: ButtonVariant::Letter,
            onclick: move |_| {
                if let Err(e) = flow.write().open_letter() {
                    tracing::warn!("Opening letter failed: {}", e);
                }
            },
            h3 { class: "script", "{finale.trigger_label}" }
        }

        if letter_open {
            LetterOverlay {
                letter: finale.letter.clone(),
                onclose: close,
            }
        }
    }
}
