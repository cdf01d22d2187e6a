//! Change notifications emitted by the flow controller.

use std::fmt;

use super::letter::CloseTrigger;
use super::step::Step;

/// Something that just happened to the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// Moved one card forward
    Advanced { from: Step, to: Step },
    /// Advance attempted on the reveal card with messages still hidden
    AdvanceRejected { remaining: usize },
    /// A hidden message was opened for the first time
    Revealed { index: usize },
    LetterOpened,
    LetterClosed { trigger: CloseTrigger },
}

impl fmt::Display for FlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowEvent::Advanced { from, to } => write!(f, "advanced {} -> {}", from, to),
            FlowEvent::AdvanceRejected { remaining } => {
                write!(f, "advance rejected, {} hidden", remaining)
            }
            FlowEvent::Revealed { index } => write!(f, "revealed message {}", index),
            FlowEvent::LetterOpened => write!(f, "letter opened"),
            FlowEvent::LetterClosed { trigger } => write!(f, "letter closed via {}", trigger),
        }
    }
}
