use dioxus::prelude::*;
use heartnote_core::{FlowController, FlowEvent, Motion, Step};
use heartnote_ui::{BackdropBlobs, FloatingHearts};

use crate::components::Announcer;
use crate::context::LaunchSettings;
use crate::pages::{FinaleCard, IntroCard, RevealCard, SadnessCard};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the flow controller and shows exactly one card for the current step.
#[component]
pub fn App() -> Element {
    let settings = use_context::<LaunchSettings>();
    let mut last_event: Signal<Option<FlowEvent>> = use_signal(|| None);
    let flow: Signal<FlowController> = use_signal(move || {
        let mut flow = FlowController::new();
        flow.subscribe(move |event| last_event.set(Some(*event)));
        flow
    });

    use_context_provider(|| flow);
    use_context_provider(|| last_event);

    let step = flow.read().step();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page",
            BackdropBlobs {}
            FloatingHearts { field: settings.hearts.clone() }

            main { class: "stage", {card_for(step)} }

            Announcer {}
        }
    }
}

/// The card element for `step`.
///
/// Every arm is its own template, so a step change replaces the card node
/// and the new card plays its enter motion. Cards have no exit motion.
fn card_for(step: Step) -> Element {
    let motion = Motion::for_step(step).class();

    match step {
        Step::Intro => rsx! {
            div { class: "card {motion}", IntroCard {} }
        },
        Step::Sadness => rsx! {
            div { class: "card {motion}", SadnessCard {} }
        },
        Step::Reveal => rsx! {
            div { class: "card {motion}", RevealCard {} }
        },
        Step::Letter => rsx! {
            div { class: "card {motion}", FinaleCard {} }
        },
    }
}
