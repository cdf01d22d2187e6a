//! "Our Memories" strip at the bottom of the letter.

use dioxus::prelude::*;
use heartnote_core::Memory;
use heartnote_ui::{Glyph, Icon};

const TILT_CLASSES: [&str; 2] = ["memory tilt-right", "memory tilt-left"];

#[component]
pub fn MemoryGallery(title: String, memories: Vec<Memory>) -> Element {
    if memories.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "memory-gallery",
            h3 { class: "gallery-title", "{title}" }
            for (i, memory) in memories.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "{TILT_CLASSES[i % 2]}",
                    match memory {
                        Memory::Photo { image } => rsx! {
                            img { class: "memory-photo", src: "{image.src}", alt: "{image.alt}" }
                        },
                        Memory::Video { thumbnail, caption } => rsx! {
                            div { class: "memory-video",
                                img { src: "{thumbnail.src}", alt: "{thumbnail.alt}" }
                                div { class: "play-badge",
                                    Icon { glyph: Glyph::Play, size: 24, filled: true }
                                }
                            }
                            p { class: "memory-caption", "{caption}" }
                        },
                    }
                }
            }
        }
    }
}
