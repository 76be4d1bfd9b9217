//! Loading positions into a `GameState` and saving them back.

use tracing::info;

use super::decode::decode;
use super::encode::encode;
use super::error::NotationError;
use super::layout::{Layout, PieceSpec, Placement};
use crate::core::GameState;
use crate::pieces::ColumnSpawner;

/// Decode `text` and spawn every described stack onto `state`.
///
/// The whole position is decoded and every target square checked before
/// anything is spawned, so a rejected position leaves `state` unchanged.
/// Returns the decoded layout.
///
/// # Errors
///
/// Any decoding error, [`NotationError::Stack`] for a square the board
/// does not register, and [`NotationError::SquareOccupied`] for a square
/// that already holds a column.
pub fn load<S: ColumnSpawner>(
    text: &str,
    state: &mut GameState,
    spawner: &mut S,
) -> Result<Layout, NotationError> {
    let layout = decode(text, state.config(), &*spawner)?;

    for placement in &layout.placements {
        if state.board().column_at(placement.at)?.is_some() {
            return Err(NotationError::SquareOccupied(placement.at));
        }
    }

    let mut columns = 0;
    for placement in &layout.placements {
        spawner.spawn_column(state, &placement.stack, placement.at)?;
        columns += 1;
    }

    info!(
        board = %layout.board_id,
        columns,
        pieces = layout.piece_count(),
        "position loaded"
    );
    Ok(layout)
}

/// Describe every placed column of `state` as a layout.
///
/// Columns without a square are not part of a position and are skipped.
#[must_use]
pub fn describe(state: &GameState, board_id: &str) -> Layout {
    let mut placements: Vec<Placement> = state
        .board()
        .occupied()
        .filter_map(|(at, id)| {
            let column = state.column(id)?;
            let stack = column
                .pieces()
                .iter()
                .filter_map(|&p| state.piece(p))
                .map(|piece| PieceSpec {
                    code: piece.code().to_string(),
                    notes: piece.notes().map(str::to_string),
                })
                .collect();
            Some(Placement { at, stack })
        })
        .collect();
    placements.sort_by_key(|p| (std::cmp::Reverse(p.at.rank), p.at.file));

    Layout {
        board_id: board_id.to_string(),
        placements,
    }
}

/// Encode the placed columns of `state` as rpgFEN.
pub fn save(state: &GameState, board_id: &str) -> Result<String, NotationError> {
    encode(&describe(state, board_id), state.config())
}
