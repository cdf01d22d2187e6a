//! End-to-end walks through the card flow as a user would click it.

use std::cell::RefCell;
use std::rc::Rc;

use heartnote_core::{CloseTrigger, FlowController, FlowError, FlowEvent, Step};

#[test]
fn full_walk_with_early_advance_attempt() {
    let mut flow = FlowController::new();
    assert_eq!(flow.step(), Step::Intro);

    assert_eq!(flow.advance(), Ok(Step::Sadness));
    assert_eq!(flow.step().index(), 1);
    assert_eq!(flow.advance(), Ok(Step::Reveal));
    assert_eq!(flow.step().index(), 2);

    flow.reveal(0).unwrap();
    flow.reveal(1).unwrap();
    assert!(!flow.can_advance());
    assert_eq!(
        flow.advance(),
        Err(FlowError::RevealsPending { remaining: 1 })
    );
    assert_eq!(flow.step(), Step::Reveal);

    flow.reveal(2).unwrap();
    assert!(flow.all_revealed());
    assert_eq!(flow.advance(), Ok(Step::Letter));
    assert_eq!(flow.step().index(), 3);
}

#[test]
fn single_reveal_does_not_open_gate() {
    let mut flow = FlowController::new();
    flow.advance().unwrap();
    flow.advance().unwrap();

    assert_eq!(
        flow.advance(),
        Err(FlowError::RevealsPending { remaining: 3 })
    );

    flow.reveal(0).unwrap();
    assert_eq!(
        flow.advance(),
        Err(FlowError::RevealsPending { remaining: 2 })
    );
    assert_eq!(flow.step(), Step::Reveal);

    flow.reveal(2).unwrap();
    flow.reveal(2).unwrap();
    assert_eq!(
        flow.advance(),
        Err(FlowError::RevealsPending { remaining: 1 })
    );
    assert_eq!(flow.step(), Step::Reveal);

    flow.reveal(1).unwrap();
    assert_eq!(flow.advance(), Ok(Step::Letter));
}

#[test]
fn letter_reopens_with_no_memory_of_previous_cycle() {
    let mut flow = FlowController::new();
    flow.advance().unwrap();
    flow.advance().unwrap();
    for i in [2, 0, 1] {
        flow.reveal(i).unwrap();
    }
    flow.advance().unwrap();

    let closed = *flow.letter().unwrap();
    assert!(!closed.is_open());

    flow.open_letter().unwrap();
    assert!(flow.letter().unwrap().is_open());
    flow.close_letter(CloseTrigger::CloseButton).unwrap();
    assert!(!flow.letter().unwrap().is_open());
    assert_eq!(*flow.letter().unwrap(), closed);

    flow.open_letter().unwrap();
    assert!(flow.letter().unwrap().is_open());
    flow.close_letter(CloseTrigger::Backdrop).unwrap();
    assert_eq!(*flow.letter().unwrap(), closed);
    assert_eq!(flow.step(), Step::Letter);
}

#[test]
fn listener_records_a_whole_session() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut flow = FlowController::new();
    let sink = Rc::clone(&log);
    flow.subscribe(move |ev: &FlowEvent| sink.borrow_mut().push(ev.to_string()));

    flow.advance().unwrap();
    flow.advance().unwrap();
    for i in 0..3 {
        flow.reveal(i).unwrap();
    }
    flow.reveal(1).unwrap();
    flow.advance().unwrap();
    flow.advance().unwrap();
    flow.open_letter().unwrap();
    flow.open_letter().unwrap();
    flow.close_letter(CloseTrigger::Backdrop).unwrap();
    flow.close_letter(CloseTrigger::CloseButton).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "advanced intro -> sadness",
            "advanced sadness -> reveal",
            "revealed message 0",
            "revealed message 1",
            "revealed message 2",
            "advanced reveal -> letter",
            "letter opened",
            "letter closed via backdrop",
        ]
    );
}
