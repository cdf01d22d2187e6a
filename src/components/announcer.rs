//! Polite live region describing the last flow change for screen readers.

use dioxus::prelude::*;
use heartnote_core::{FlowEvent, Step};

use crate::context::use_last_event;

/// Spoken text for a flow event.
pub fn announcement(event: &FlowEvent) -> String {
    match event {
        FlowEvent::Advanced { to, .. } => format!("Card {} of {}", to.index() + 1, Step::ALL.len()),
        FlowEvent::AdvanceRejected { remaining: 1 } => {
            "Open the last message to continue".to_string()
        }
        FlowEvent::AdvanceRejected { remaining } => {
            format!("Open {} more messages to continue", remaining)
        }
        FlowEvent::Revealed { index } => format!("Message {} revealed", index + 1),
        FlowEvent::LetterOpened => "Letter opened".to_string(),
        FlowEvent::LetterClosed { .. } => "Letter closed".to_string(),
    }
}

#[component]
pub fn Announcer() -> Element {
    let last_event = use_last_event();
    let text = last_event
        .read()
        .as_ref()
        .map(announcement)
        .unwrap_or_default();

    rsx! {
        div { class: "sr-only", "aria-live": "polite", "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartnote_core::CloseTrigger;

    #[test]
    fn advance_names_card_position() {
        let ev = FlowEvent::Advanced {
            from: Step::Intro,
            to: Step::Sadness,
        };
        assert_eq!(announcement(&ev), "Card 2 of 4");
    }

    #[test]
    fn rejection_counts_hidden_messages() {
        assert_eq!(
            announcement(&FlowEvent::AdvanceRejected { remaining: 1 }),
            "Open the last message to continue"
        );
        assert_eq!(
            announcement(&FlowEvent::AdvanceRejected { remaining: 3 }),
            "Open 3 more messages to continue"
        );
    }

    #[test]
    fn reveal_and_letter() {
        assert_eq!(
            announcement(&FlowEvent::Revealed { index: 0 }),
            "Message 1 revealed"
        );
        assert_eq!(
            announcement(&FlowEvent::LetterClosed {
                trigger: CloseTrigger::Backdrop
            }),
            "Letter closed"
        );
    }
}
