//! Move layer integration tests.
//!
//! Full move sequences through `MoveMaker`, checking the listener
//! notifications, input locking and the resulting board.

use column_chess::core::{BoardConfig, Coordinate, GameState, StackError};
use column_chess::interaction::{MoveDescriptor, MoveListener, MoveMaker, RecordingListener};
use column_chess::notation::{load, save};
use column_chess::pieces::PieceSpawner;

fn position(text: &str) -> GameState {
    let mut state = GameState::new(BoardConfig::standard(8, 8));
    load(text, &mut state, &mut PieceSpawner::standard()).unwrap();
    state
}

fn at(text: &str) -> Coordinate {
    text.parse().unwrap()
}

/// Listener that counts notifications and remembers the last descriptor.
#[derive(Default)]
struct Counter {
    started: usize,
    ended: usize,
    last: Option<String>,
}

impl MoveListener for Counter {
    fn on_move_started(&mut self, descriptor: &MoveDescriptor) {
        self.started += 1;
        self.last = Some(descriptor.to_string());
    }

    fn on_move_ended(&mut self, _descriptor: &MoveDescriptor) {
        self.ended += 1;
    }
}

// =============================================================================
// Move Sequences
// =============================================================================

/// Test a short game: advance, capture and return, then merge.
#[test]
fn test_move_sequence() {
    let mut state = position("1|g+G,2,r/4,y");
    let mut maker = MoveMaker::with_listener(RecordingListener::default());

    // The green soldier and officer advance together.
    maker.select(&mut state, at("a8")).unwrap();
    maker.move_to(&mut state, at("b7")).unwrap();
    maker.finish(&mut state).unwrap();

    // They capture the red soldier and come back.
    maker.select(&mut state, at("b7")).unwrap();
    maker.capture(&mut state, at("d8")).unwrap();
    maker.finish(&mut state).unwrap();

    // Then jump on the yellow soldier.
    maker.select(&mut state, at("b7")).unwrap();
    maker.merge_onto(&mut state, at("e7")).unwrap();
    maker.finish(&mut state).unwrap();

    let moves: Vec<String> = maker.history().iter().map(ToString::to_string).collect();
    assert_eq!(moves, ["a8-b7", "b7-d8-b7", "b7-e7"]);
    assert_eq!(maker.listener().started, maker.listener().ended);

    assert_eq!(save(&state, "1").unwrap(), "1|/4,g+G+r+y");
    assert!(state.check_invariants().is_ok());
}

/// Test that every request fails while a move is pending and succeeds
/// again after it finishes.
#[test]
fn test_input_lock() {
    let mut state = position("1|g,r");
    let mut maker = MoveMaker::with_listener(Counter::default());
    let mut spawner = PieceSpawner::standard();

    maker.select(&mut state, at("a8")).unwrap();
    maker.move_to(&mut state, at("a5")).unwrap();

    assert_eq!(maker.select(&mut state, at("b8")), Err(StackError::InputLocked));
    assert_eq!(maker.move_to(&mut state, at("a4")), Err(StackError::InputLocked));
    assert_eq!(maker.capture(&mut state, at("b8")), Err(StackError::InputLocked));
    assert!(maker
        .spawn(&mut state, &mut spawner, at("h1"), "g")
        .is_err());
    assert_eq!(maker.listener().started, 1);
    assert_eq!(maker.listener().ended, 0);
    assert_eq!(maker.pending().map(ToString::to_string), Some("a8-a5".into()));

    maker.finish(&mut state).unwrap();
    assert_eq!(maker.listener().ended, 1);
    assert!(maker.select(&mut state, at("b8")).is_ok());
}

/// Test that a move request without a selection is refused.
#[test]
fn test_nothing_selected() {
    let mut state = position("1|g");
    let mut maker = MoveMaker::new();

    assert_eq!(maker.move_to(&mut state, at("a1")), Err(StackError::NothingSelected));
    assert_eq!(maker.merge_onto(&mut state, at("a8")), Err(StackError::NothingSelected));
}

/// Test that deselecting resets the split boundary.
#[test]
fn test_reselect_resets_split() {
    let mut state = position("1|g+c+y,r");
    let mut maker = MoveMaker::new();

    maker.select(&mut state, at("a8")).unwrap();
    maker.select_bottom_piece(&state).unwrap();
    maker.select(&mut state, at("b8")).unwrap();

    assert_eq!(maker.split_selection(), None);
    assert_eq!(maker.selected(), state.board().column_at(at("b8")).unwrap());
}

/// Test the capture-and-return descriptor reaches the listener.
#[test]
fn test_listener_sees_descriptor() {
    let mut state = position("1|g,r");
    let mut maker = MoveMaker::with_listener(Counter::default());

    maker.select(&mut state, at("a8")).unwrap();
    maker.capture(&mut state, at("b8")).unwrap();

    assert_eq!(maker.listener().last.as_deref(), Some("a8-b8-a8"));
    let parsed: MoveDescriptor = "a8-b8-a8".parse().unwrap();
    assert_eq!(maker.pending(), Some(&parsed));
}

/// Test editing the board between moves.
#[test]
fn test_spawn_then_move() {
    let mut state = GameState::new(BoardConfig::standard(8, 8));
    let mut maker = MoveMaker::new();
    let mut spawner = PieceSpawner::standard();

    maker
        .spawn(&mut state, &mut spawner, at("d4"), "G;captain+s")
        .unwrap();
    maker.select(&mut state, at("d4")).unwrap();
    maker.move_all_but_bottom(&mut state, at("d5")).unwrap();
    maker.finish(&mut state).unwrap();

    assert_eq!(save(&state, "1").unwrap(), "1|///3,G;captain/3,s");
    assert!(state.check_invariants().is_ok());
}
