//! Hidden-message gate on the reveal card.

use crate::error::FlowError;

/// Number of hidden messages on the reveal card.
pub const REVEAL_SLOTS: usize = 3;

/// Which of the hidden messages have been opened.
///
/// Slots only go from hidden to revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    slots: [bool; REVEAL_SLOTS],
}

impl RevealState {
    /// All slots hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal one slot.
    ///
    /// Returns `Ok(true)` if the slot was hidden before, `Ok(false)` if it
    /// was already revealed.
    pub fn reveal(&mut self, index: usize) -> Result<bool, FlowError> {
        let slot = self.slots.get_mut(index).ok_or(FlowError::SlotOutOfRange {
            index,
            len: REVEAL_SLOTS,
        })?;
        let changed = !*slot;
        *slot = true;
        Ok(changed)
    }

    /// Out-of-range indices read as hidden.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.slots.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.slots.iter().all(|&s| s)
    }

    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|&&s| s).count()
    }

    pub fn remaining(&self) -> usize {
        REVEAL_SLOTS - self.revealed_count()
    }

    pub fn slots(&self) -> [bool; REVEAL_SLOTS] {
        self.slots
    }
}
