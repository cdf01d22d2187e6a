//! Blurred pastel blobs behind the cards.

use dioxus::prelude::*;

/// Three slow-pulsing colour blobs (pink, purple, yellow)
#[component]
pub fn BackdropBlobs() -> Element {
    rsx! {
        div { class: "backdrop-blobs", "aria-hidden": "true",
            div { class: "blob blob-pink" }
            div { class: "blob blob-purple blob-delay-2" }
            div { class: "blob blob-yellow blob-delay-4" }
        }
    }
}
