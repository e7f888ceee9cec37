//! Tests for the wizard navigator
//!
//! These tests verify:
//! - Initial state and the linear next/prev walk
//! - Preview only from the last question
//! - Restart from the preview, keeping selections
//! - Every invalid transition is a no-op

use syllabus_builder::{Category, SelectionRecord, Wizard, WizardStep};

fn at_last_question() -> Wizard {
    let mut wizard = Wizard::new();
    for _ in 0..7 {
        wizard.next();
    }
    wizard
}

#[test]
fn test_initial_step_is_one() {
    let wizard = Wizard::new();
    assert_eq!(wizard.step().step_number(), Some(1));
    assert_eq!(wizard.step().category(), Some(Category::GeneralPolicy));
    assert!(!wizard.is_preview());
}

#[test]
fn test_prev_at_first_step_is_noop() {
    let mut wizard = Wizard::new();
    assert!(!wizard.prev());
    assert_eq!(wizard.step().step_number(), Some(1));
}

#[test]
fn test_seven_nexts_reach_last_step() {
    let wizard = at_last_question();
    assert_eq!(wizard.step().step_number(), Some(8));
    assert_eq!(wizard.step(), WizardStep::Question(Category::PositionStatement));
}

#[test]
fn test_next_at_last_step_is_noop() {
    let mut wizard = at_last_question();
    assert!(!wizard.next());
    assert_eq!(wizard.step().step_number(), Some(8));
}

#[test]
fn test_walk_forward_and_back() {
    let mut wizard = Wizard::new();
    for (i, category) in Category::all().enumerate() {
        assert_eq!(wizard.step().category(), Some(category));
        assert_eq!(wizard.step().step_number(), Some(i + 1));
        wizard.next();
    }
    for _ in 0..7 {
        assert!(wizard.prev());
    }
    assert_eq!(wizard.step(), WizardStep::default());
}

#[test]
fn test_preview_from_last_step() {
    let mut wizard = at_last_question();
    assert!(wizard.preview());
    assert_eq!(wizard.step(), WizardStep::Preview);
    assert_eq!(wizard.step().step_number(), None);
}

#[test]
fn test_preview_from_other_steps_is_noop() {
    let mut wizard = Wizard::new();
    for expected in 1..=7 {
        let before = wizard.clone();
        assert!(!wizard.preview());
        assert_eq!(wizard, before);
        assert_eq!(wizard.step().step_number(), Some(expected));
        wizard.next();
    }
}

#[test]
fn test_navigation_in_preview_is_noop() {
    let mut wizard = at_last_question();
    wizard.preview();
    assert!(!wizard.next());
    assert!(!wizard.prev());
    assert!(!wizard.preview());
    assert!(!wizard.jump_to(3));
    assert!(wizard.is_preview());
}

#[test]
fn test_restart_only_from_preview() {
    let mut wizard = Wizard::new();
    wizard.next();
    assert!(!wizard.restart());
    assert_eq!(wizard.step().step_number(), Some(2));

    let mut wizard = at_last_question();
    wizard.preview();
    assert!(wizard.restart());
    assert_eq!(wizard.step().step_number(), Some(1));
}

#[test]
fn test_restart_keeps_selections() {
    let selections = SelectionRecord::new()
        .with_single(Category::GeneralPolicy, "Students are never allowed to use AI tools.");
    let snapshot = selections.clone();

    let mut wizard = at_last_question();
    wizard.preview();
    wizard.restart();

    // The navigator never sees the record, so it is untouched
    assert_eq!(selections, snapshot);
    assert!(!selections.is_empty());
}

#[test]
fn test_titles() {
    assert_eq!(WizardStep::default().title(), "1. General Policy about AI Use");
    assert_eq!(WizardStep::Preview.title(), "Preview of Your Syllabus Statement");
}
