//! The flow controller: sole owner of the current card and its state.

use std::fmt;

use tracing::{debug, info};

use super::events::FlowEvent;
use super::letter::{CloseTrigger, LetterOverlay};
use super::reveal::RevealState;
use super::step::Step;
use crate::error::FlowError;

/// The showing card together with the state only that card owns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Intro,
    Sadness,
    Reveal(RevealState),
    Letter(LetterOverlay),
}

impl Stage {
    /// Fresh state for entering `step`.
    pub fn enter(step: Step) -> Self {
        match step {
            Step::Intro => Stage::Intro,
            Step::Sadness => Stage::Sadness,
            Step::Reveal => Stage::Reveal(RevealState::new()),
            Step::Letter => Stage::Letter(LetterOverlay::new()),
        }
    }

    pub fn step(&self) -> Step {
        match self {
            Stage::Intro => Step::Intro,
            Stage::Sadness => Step::Sadness,
            Stage::Reveal(_) => Step::Reveal,
            Stage::Letter(_) => Step::Letter,
        }
    }
}

/// Callback told about every change to the flow.
pub type FlowListener = Box<dyn FnMut(&FlowEvent)>;

/// Drives the card sequence.
///
/// # Example
///
/// ```
/// use heartnote_core::{FlowController, FlowError, Step};
///
/// let mut flow = FlowController::new();
/// flow.advance().unwrap();
/// flow.advance().unwrap();
///
/// flow.reveal(0).unwrap();
/// assert_eq!(
///     flow.advance(),
///     Err(FlowError::RevealsPending { remaining: 2 })
/// );
/// assert_eq!(flow.step(), Step::Reveal);
/// ```
#[derive(Default)]
pub struct FlowController {
    stage: Stage,
    listener: Option<FlowListener>,
}

impl FlowController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the change listener, replacing any previous one.
    pub fn subscribe(&mut self, listener: impl FnMut(&FlowEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn step(&self) -> Step {
        self.stage.step()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Reveal state, present only on the reveal card.
    pub fn reveal_state(&self) -> Option<&RevealState> {
        match &self.stage {
            Stage::Reveal(state) => Some(state),
            _ => None,
        }
    }

    /// Letter overlay, present only on the final card.
    pub fn letter(&self) -> Option<&LetterOverlay> {
        match &self.stage {
            Stage::Letter(letter) => Some(letter),
            _ => None,
        }
    }

    /// Whether [`advance`](Self::advance) would move to another card.
    pub fn can_advance(&self) -> bool {
        match &self.stage {
            Stage::Intro | Stage::Sadness => true,
            Stage::Reveal(state) => state.all_revealed(),
            Stage::Letter(_) => false,
        }
    }

    /// All three messages open. False on every other card.
    pub fn all_revealed(&self) -> bool {
        self.reveal_state().is_some_and(RevealState::all_revealed)
    }

    /// Move exactly one card forward.
    ///
    /// On the final card this does nothing and returns `Ok(Step::Letter)`.
    /// Leaving the reveal card with messages still hidden is rejected and
    /// the state is left untouched.
    pub fn advance(&mut self) -> Result<Step, FlowError> {
        let from = self.step();

        if let Stage::Reveal(state) = &self.stage {
            if !state.all_revealed() {
                let remaining = state.remaining();
                debug!(remaining, "advance rejected on reveal card");
                self.notify(FlowEvent::AdvanceRejected { remaining });
                return Err(FlowError::RevealsPending { remaining });
            }
        }

        let Some(to) = from.next() else {
            debug!("advance at final card ignored");
            return Ok(from);
        };

        self.stage = Stage::enter(to);
        info!(%from, %to, "card advanced");
        self.notify(FlowEvent::Advanced { from, to });
        Ok(to)
    }

    /// Open one hidden message on the reveal card.
    ///
    /// Opening a message twice is a no-op.
    pub fn reveal(&mut self, index: usize) -> Result<(), FlowError> {
        let actual = self.step();
        let Stage::Reveal(state) = &mut self.stage else {
            return Err(FlowError::WrongStep {
                expected: Step::Reveal,
                actual,
            });
        };

        if state.reveal(index)? {
            debug!(index, remaining = state.remaining(), "message revealed");
            self.notify(FlowEvent::Revealed { index });
        }
        Ok(())
    }

    pub fn open_letter(&mut self) -> Result<(), FlowError> {
        if self.letter_mut()?.open() {
            debug!("letter opened");
            self.notify(FlowEvent::LetterOpened);
        }
        Ok(())
    }

    pub fn close_letter(&mut self, trigger: CloseTrigger) -> Result<(), FlowError> {
        if self.letter_mut()?.close() {
            debug!(%trigger, "letter closed");
            self.notify(FlowEvent::LetterClosed { trigger });
        }
        Ok(())
    }

    fn letter_mut(&mut self) -> Result<&mut LetterOverlay, FlowError> {
        let actual = self.step();
        match &mut self.stage {
            Stage::Letter(letter) => Ok(letter),
            _ => Err(FlowError::WrongStep {
                expected: Step::Letter,
                actual,
            }),
        }
    }

    fn notify(&mut self, event: FlowEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
    }
}

impl fmt::Debug for FlowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowController")
            .field("stage", &self.stage)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn at_step(step: Step) -> FlowController {
        let mut flow = FlowController::new();
        while flow.step() < step {
            if flow.step() == Step::Reveal {
                for i in 0..3 {
                    flow.reveal(i).unwrap();
                }
            }
            flow.advance().unwrap();
        }
        flow
    }

    #[test]
    fn starts_on_intro() {
        let flow = FlowController::new();
        assert_eq!(flow.step(), Step::Intro);
        assert!(flow.can_advance());
        assert!(flow.reveal_state().is_none());
        assert!(flow.letter().is_none());
    }

    #[test]
    fn reveal_state_is_fresh_on_entry() {
        let flow = at_step(Step::Reveal);
        assert_eq!(flow.reveal_state(), Some(&RevealState::new()));
        assert!(!flow.can_advance());
        assert!(!flow.all_revealed());
    }

    #[test]
    fn reveal_state_dropped_after_advance() {
        let flow = at_step(Step::Letter);
        assert!(flow.reveal_state().is_none());
        assert!(!flow.all_revealed());
        assert_eq!(flow.letter(), Some(&LetterOverlay::new()));
    }

    #[test]
    fn reveal_outside_reveal_card_fails() {
        let mut flow = FlowController::new();
        assert_eq!(
            flow.reveal(0),
            Err(FlowError::WrongStep {
                expected: Step::Reveal,
                actual: Step::Intro
            })
        );
    }

    #[test]
    fn letter_outside_final_card_fails() {
        let mut flow = at_step(Step::Reveal);
        assert!(matches!(
            flow.open_letter(),
            Err(FlowError::WrongStep { .. })
        ));
        assert!(matches!(
            flow.close_letter(CloseTrigger::Backdrop),
            Err(FlowError::WrongStep { .. })
        ));
    }

    #[test]
    fn final_card_accepts_no_advance() {
        let mut flow = at_step(Step::Letter);
        assert!(!flow.can_advance());
        assert_eq!(flow.advance(), Ok(Step::Letter));
        assert_eq!(flow.step(), Step::Letter);
    }

    #[test]
    fn close_triggers_are_equivalent() {
        let mut by_button = at_step(Step::Letter);
        let mut by_backdrop = at_step(Step::Letter);
        by_button.open_letter().unwrap();
        by_backdrop.open_letter().unwrap();
        by_button.close_letter(CloseTrigger::CloseButton).unwrap();
        by_backdrop.close_letter(CloseTrigger::Backdrop).unwrap();
        assert_eq!(by_button.stage(), by_backdrop.stage());
    }

    #[test]
    fn advance_at_final_card_keeps_letter_state() {
        let mut flow = at_step(Step::Letter);
        flow.open_letter().unwrap();
        flow.advance().unwrap();
        assert!(flow.letter().is_some_and(LetterOverlay::is_open));
    }

    #[test]
    fn listener_sees_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut flow = FlowController::new();
        let sink = Rc::clone(&seen);
        flow.subscribe(move |ev| sink.borrow_mut().push(*ev));

        flow.advance().unwrap();
        flow.advance().unwrap();
        flow.reveal(0).unwrap();
        flow.reveal(0).unwrap();
        let _ = flow.advance();

        assert_eq!(
            *seen.borrow(),
            vec![
                FlowEvent::Advanced {
                    from: Step::Intro,
                    to: Step::Sadness
                },
                FlowEvent::Advanced {
                    from: Step::Sadness,
                    to: Step::Reveal
                },
                FlowEvent::Revealed { index: 0 },
                FlowEvent::AdvanceRejected { remaining: 2 },
            ]
        );
    }

    #[test]
    fn subscribe_replaces_listener() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        let mut flow = FlowController::new();

        let a = Rc::clone(&first);
        flow.subscribe(move |_| *a.borrow_mut() += 1);
        flow.advance().unwrap();

        let b = Rc::clone(&second);
        flow.subscribe(move |_| *b.borrow_mut() += 1);
        flow.advance().unwrap();

        assert_eq!(*first.borrow(), 1);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn debug_omits_listener_body() {
        let mut flow = FlowController::new();
        flow.subscribe(|_| {});
        let out = format!("{:?}", flow);
        assert!(out.contains("Intro"));
        assert!(out.contains("has_listener: true"));
    }
}
