//! Card flow state machine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  FlowController: owns the single Stage                          │
//! │  ├── Intro                                                      │
//! │  ├── Sadness                                                    │
//! │  ├── Reveal(RevealState)    three one-way slots, gates advance  │
//! │  └── Letter(LetterOverlay)  terminal, overlay toggles in place  │
//! │                                                                 │
//! │  FlowEvent: what the single subscriber is told after a change   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Per-card state lives inside its [`Stage`] variant, so it exists only
//! while that card is showing and is dropped on advance.

mod controller;
mod events;
mod letter;
mod reveal;
mod step;

pub use controller::{FlowController, FlowListener, Stage};
pub use events::FlowEvent;
pub use letter::{CloseTrigger, LetterOverlay};
pub use reveal::{RevealState, REVEAL_SLOTS};
pub use step::Step;
