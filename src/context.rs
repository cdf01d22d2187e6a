//! Shared state for the card views.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| flow);
//!
//! // In a card
//! let mut flow = use_flow();
//! flow.write().advance();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use heartnote_core::{CardContent, FlowController, FlowEvent, HeartField};

/// Startup values handed over from the command line.
#[derive(Clone)]
pub struct LaunchSettings {
    pub content: Arc<CardContent>,
    pub hearts: HeartField,
}

/// Hook to access the flow controller.
///
/// Writing through the signal re-renders the step view.
pub fn use_flow() -> Signal<FlowController> {
    use_context::<Signal<FlowController>>()
}

/// Most recent flow event, read by the screen-reader announcer.
pub fn use_last_event() -> Signal<Option<FlowEvent>> {
    use_context::<Signal<Option<FlowEvent>>>()
}

/// Card text and images.
pub fn use_content() -> Arc<CardContent> {
    use_context::<LaunchSettings>().content
}
