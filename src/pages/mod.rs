//! One view per card of the flow.

mod finale;
mod intro;
mod reveal;
mod sadness;

pub use finale::FinaleCard;
pub use intro::IntroCard;
pub use reveal::RevealCard;
pub use sadness::SadnessCard;

use dioxus::prelude::*;
use heartnote_core::FlowController;

/// Advance the flow; refusals are logged, never shown.
pub(crate) fn advance(mut flow: Signal<FlowController>) {
    if let Err(e) = flow.write().advance() {
        tracing::debug!("Advance refused: {}", e);
    }
}
