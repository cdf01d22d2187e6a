//! The four cards of the flow.

use std::fmt;

/// One card of the linear flow.
///
/// Ordered; the flow only ever moves to [`Step::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// "Hey Cutiepie" opener
    Intro,
    /// "I know I hurt you..."
    Sadness,
    /// Three hidden messages to tap open
    Reveal,
    /// Final card with the letter overlay
    Letter,
}

impl Step {
    /// Every step in flow order.
    pub const ALL: [Step; 4] = [Step::Intro, Step::Sadness, Step::Reveal, Step::Letter];

    /// Zero-based position in the flow.
    pub fn index(self) -> u8 {
        match self {
            Step::Intro => 0,
            Step::Sadness => 1,
            Step::Reveal => 2,
            Step::Letter => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Step> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The following step, or `None` at the end of the flow.
    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::Intro => "intro",
            Step::Sadness => "sadness",
            Step::Reveal => "reveal",
            Step::Letter => "letter",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
