//! Letter overlay on the final card.

use std::fmt;

/// What dismissed the letter. Both triggers close it the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The "x" control on the letter panel
    CloseButton,
    /// A click on the dimmed area around the panel
    Backdrop,
}

impl fmt::Display for CloseTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseTrigger::CloseButton => write!(f, "close button"),
            CloseTrigger::Backdrop => write!(f, "backdrop"),
        }
    }
}

/// Open/closed state of the letter.
///
/// Carries nothing between cycles: reopening shows the same letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterOverlay {
    open: bool,
}

impl LetterOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the overlay was closed before.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Returns whether the overlay was open before.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!LetterOverlay::new().is_open());
    }

    #[test]
    fn open_close_cycle() {
        let mut letter = LetterOverlay::new();
        assert!(letter.open());
        assert!(letter.is_open());
        assert!(!letter.open());

        assert!(letter.close());
        assert!(!letter.is_open());
        assert!(!letter.close());
    }

    #[test]
    fn reopen_matches_fresh_overlay() {
        let mut letter = LetterOverlay::new();
        letter.open();
        letter.close();
        assert_eq!(letter, LetterOverlay::new());
    }

    #[test]
    fn trigger_names() {
        assert_eq!(CloseTrigger::CloseButton.to_string(), "close button");
        assert_eq!(CloseTrigger::Backdrop.to_string(), "backdrop");
    }
}
