//! Sliding letter overlay.
//!
//! Dismissed by the close button or a click on the dimmed backdrop; both go
//! through the same `onclose` handler.

use dioxus::prelude::*;
use heartnote_core::content::Letter;
use heartnote_core::CloseTrigger;
use heartnote_ui::CloseButton;

use super::MemoryGallery;

#[component]
pub fn LetterOverlay(
    letter: Letter,
    /// Called with whichever control dismissed the letter
    onclose: EventHandler<CloseTrigger>,
) -> Element {
    rsx! {
        div { class: "letter-overlay", role: "dialog", "aria-modal": "true",
            div {
                class: "letter-backdrop",
                onclick: move |_| onclose.call(CloseTrigger::Backdrop),
            }

            div { class: "letter-panel",
                div { class: "corner corner-top" }
                div { class: "corner corner-bottom" }

                CloseButton { onclick: move |_| onclose.call(CloseTrigger::CloseButton) }

                div { class: "letter-body",
                    h2 { class: "letter-title script", "{letter.title}" }

                    div { class: "letter-text",
                        for (i, paragraph) in letter.paragraphs.iter().enumerate() {
                            p { key: "{i}", "{paragraph}" }
                        }
                        p { class: "letter-closing", "{letter.closing}" }
                    }

                    MemoryGallery {
                        title: letter.gallery_title.clone(),
                        memories: letter.memories.clone(),
                    }
                }
            }
        }
    }
}
