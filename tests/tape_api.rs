//! Scenario tests for the public tape API.

use tape::{Config, Tape, TapeError};

// =============================================================================
// Helpers
// =============================================================================

fn new_tape() -> Tape<char> {
    return Tape::with_config(Config::checked().with_invariant_checks(true));
}

/// Build a tape holding `text` with the cursor at start.
fn tape_of(text: &str) -> Tape<char> {
    let mut tape = new_tape();
    for c in text.chars() {
        tape.insert_left(c).step();
    }
    tape.rewind();
    return tape;
}

fn contents(tape: &Tape<char>) -> String {
    let mut walker = tape.copy();
    walker.rewind();
    let mut out = String::new();
    while let Ok(c) = walker.read() {
        out.push(*c);
        walker.step();
    }
    return out;
}

// =============================================================================
// Creation
// =============================================================================

#[test]
fn create_postconditions() {
    let tape = new_tape();
    assert!(tape.is_empty());
    assert!(tape.at_start());
    assert!(tape.at_stop());
    assert_eq!(tape.len(), 0);
    assert!(tape.validate().is_ok());
}

#[test]
fn default_matches_new() {
    let a: Tape<u8> = Tape::default();
    let b: Tape<u8> = Tape::new();
    assert_eq!(a, b);
    assert_eq!(a.config(), &Config::default());
}

#[test]
fn rewind_on_empty_stays_at_stop() {
    let mut tape = new_tape();
    tape.rewind().rewind();
    assert!(tape.at_start());
    assert!(tape.at_stop());
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn insert_left_right_left_orders_a_c_b() {
    let mut tape = new_tape();
    tape.insert_left('a');
    tape.insert_right('b').unwrap();
    tape.insert_left('c');

    assert_eq!(contents(&tape), "acb");
    assert_eq!(tape.read(), Ok(&'c'));
    assert_eq!(tape.dump(), "#-a-[c]-b-#");
    assert_eq!(tape.to_string(), "#-a-[c]-b-#");
}

#[test]
fn insert_then_erase_leaves_empty_tape_at_stop() {
    let mut tape = new_tape();
    tape.insert_left('x');
    assert_eq!(tape.erase(), Ok('x'));

    assert!(tape.is_empty());
    assert!(tape.at_stop());
    assert!(tape.at_start());
    assert_eq!(tape.dump(), "#-[]-#");
}

#[test]
fn stepping_past_the_last_slot() {
    let mut tape = tape_of("abc");
    assert!(tape.at_start());
    assert_eq!(tape.read(), Ok(&'a'));

    tape.step().step();
    assert_eq!(tape.read(), Ok(&'c'));
    assert!(!tape.at_stop());

    tape.step();
    assert!(tape.at_stop());
    assert_eq!(tape.read(), Err(TapeError::CursorAtStop));
    assert_eq!(tape.dump(), "#-a-b-c-[]-#");

    tape.step();
    assert!(tape.at_stop());
    assert_eq!(tape.len(), 3);
}

#[test]
fn rewind_returns_to_first_slot() {
    let mut tape = tape_of("abc");
    tape.step().step();
    tape.rewind();
    assert!(tape.at_start());
    assert_eq!(tape.read(), Ok(&'a'));
    assert_eq!(tape.position(), 0);
}

#[test]
fn build_in_reverse_with_insert_left() {
    let mut tape = new_tape();
    for c in "cba".chars() {
        tape.insert_left(c);
    }
    assert_eq!(contents(&tape), "abc");
    assert!(tape.at_start());
}

#[test]
fn build_forward_with_insert_right() {
    let mut tape = new_tape();
    for c in "abc".chars() {
        tape.insert_right(c).unwrap();
    }
    assert_eq!(contents(&tape), "abc");
    assert_eq!(tape.dump(), "#-a-b-[c]-#");
}

#[test]
fn erase_everything_from_start() {
    let mut tape = tape_of("hello");
    let mut erased = String::new();
    while !tape.at_stop() {
        erased.push(tape.erase().unwrap());
    }
    assert_eq!(erased, "hello");
    assert!(tape.is_empty());
}

#[test]
fn erase_last_moves_to_stop() {
    let mut tape = tape_of("ab");
    tape.step();
    assert_eq!(tape.erase(), Ok('b'));
    assert!(tape.at_stop());
    assert_eq!(tape.dump(), "#-a-[]-#");

    tape.insert_left('z');
    assert_eq!(tape.dump(), "#-a-[z]-#");
}

// =============================================================================
// Contract errors
// =============================================================================

#[test]
fn read_on_empty_tape() {
    let tape = new_tape();
    assert_eq!(tape.read(), Err(TapeError::EmptyTape));
}

#[test]
fn erase_on_empty_tape() {
    let mut tape = new_tape();
    assert_eq!(tape.erase(), Err(TapeError::EmptyTape));
    assert!(tape.validate().is_ok());
}

#[test]
fn erase_at_stop() {
    let mut tape = tape_of("a");
    tape.step();
    assert_eq!(tape.erase(), Err(TapeError::CursorAtStop));
    assert_eq!(tape.len(), 1);
}

#[test]
fn insert_right_at_stop_is_rejected_and_leaves_tape_alone() {
    let mut tape = tape_of("ab");
    tape.step().step();
    let before = tape.copy();

    assert_eq!(tape.insert_right('x').err(), Some(TapeError::CursorAtStop));
    assert_eq!(tape, before);
}

#[test]
fn errors_are_contract_violations() {
    assert!(TapeError::EmptyTape.is_contract_violation());
    assert!(TapeError::CursorAtStop.is_contract_violation());
    assert!(!TapeError::InvariantViolated("x").is_contract_violation());
    assert_eq!(TapeError::CursorAtStop.to_string(), "cursor is at the stop position");
}

#[test]
#[should_panic(expected = "tape contract violated")]
fn strict_insert_right_at_stop_panics() {
    let mut tape: Tape<char> = Tape::with_config(Config::strict());
    tape.insert_left('a').step();
    let _ = tape.insert_right('b');
}

#[test]
#[cfg(not(feature = "strict"))]
fn default_tape_reports_read_at_stop_as_error() {
    let mut tape: Tape<char> = Tape::new();
    tape.insert_left('a').step();
    assert_eq!(tape.read(), Err(TapeError::CursorAtStop));
}

#[test]
#[cfg(feature = "strict")]
#[should_panic(expected = "tape contract violated")]
fn default_tape_panics_on_read_at_stop_with_strict_feature() {
    let mut tape: Tape<char> = Tape::new();
    tape.insert_left('a').step();
    let _ = tape.read();
}

#[test]
fn explicit_mode_overrides_feature_default() {
    for config in [Config::checked(), Config::strict()] {
        let mut tape: Tape<char> = Tape::with_config(config);
        tape.insert_left('a').step();
        let outcome = std::panic::catch_unwind(move || tape.read().copied());
        if config.is_strict() {
            assert!(outcome.is_err());
        } else {
            assert_eq!(outcome.ok(), Some(Err(TapeError::CursorAtStop)));
        }
    }
}

#[test]
fn strict_mode_allows_valid_operations() {
    let mut tape: Tape<char> = Tape::with_config(Config::strict());
    tape.insert_right('a').unwrap();
    tape.insert_right('b').unwrap();
    assert_eq!(tape.erase(), Ok('b'));
    assert_eq!(tape.dump(), "#-a-[]-#");
}

// =============================================================================
// Copy and destroy
// =============================================================================

#[test]
fn copy_is_independent() {
    let mut tape = tape_of("abc");
    tape.step();
    let mut copy = tape.copy();

    assert_eq!(copy, tape);
    assert_eq!(copy.len(), tape.len());
    assert_eq!(copy.read(), Ok(&'b'));

    copy.erase().unwrap();
    copy.insert_left('z');
    assert_eq!(copy.dump(), "#-a-[z]-c-#");
    assert_eq!(tape.dump(), "#-a-[b]-c-#");

    tape.rewind();
    tape.erase().unwrap();
    assert_eq!(copy.dump(), "#-a-[z]-c-#");
}

#[test]
fn copy_starts_at_start_iff_source_does() {
    let tape = tape_of("abc");
    assert!(tape.copy().at_start());

    let mut moved = tape_of("abc");
    moved.step();
    assert!(!moved.copy().at_start());

    let empty = new_tape();
    let copy = empty.copy();
    assert!(copy.at_start());
    assert!(copy.at_stop());
    assert!(copy.is_empty());
}

#[test]
fn clone_is_copy() {
    let mut tape = tape_of("ab");
    tape.step();
    let clone = tape.clone();
    assert_eq!(clone.dump(), "#-a-[b]-#");
}

#[test]
fn destroy_reports_released_slots() {
    let mut tape = tape_of("abcde");
    tape.erase().unwrap();
    tape.erase().unwrap();
    let copy = tape.copy();

    assert_eq!(tape.destroy(), 3);
    assert_eq!(copy.destroy(), 3);
    assert_eq!(new_tape().destroy(), 0);
}
