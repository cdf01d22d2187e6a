//! Heartnote Core Library
//!
//! The state behind a four-card apology page: a linear flow of cards, a
//! gate of three hidden messages, and a dismissible letter overlay.
//!
//! ## Overview
//!
//! ```text
//! Intro --advance--> Sadness --advance--> Reveal --(all revealed)--> Letter
//!                                                                   │
//!                                 LetterOverlay: closed <-> open ───┘
//! ```
//!
//! Nothing here knows about rendering. The desktop binary holds a
//! [`FlowController`] in a signal and re-renders whichever view matches
//! [`FlowController::step`].
//!
//! ## Quick Start
//!
//! ```
//! use heartnote_core::{CloseTrigger, FlowController, Step};
//!
//! let mut flow = FlowController::new();
//! flow.advance().unwrap();
//! flow.advance().unwrap();
//! assert_eq!(flow.step(), Step::Reveal);
//!
//! for slot in 0..3 {
//!     flow.reveal(slot).unwrap();
//! }
//! assert_eq!(flow.advance().unwrap(), Step::Letter);
//!
//! flow.open_letter().unwrap();
//! flow.close_letter(CloseTrigger::Backdrop).unwrap();
//! ```

pub mod ambient;
pub mod content;
pub mod error;
pub mod flow;
pub mod logging;

// Re-exports
pub use ambient::{FloatingHeart, HeartField, Motion, DEFAULT_HEART_COUNT};
pub use content::{CardContent, ImageRef, Memory, RevealMessage, Tint};
pub use error::{ContentError, FlowError};
pub use flow::{
    CloseTrigger, FlowController, FlowEvent, LetterOverlay, RevealState, Stage, Step, REVEAL_SLOTS,
};
