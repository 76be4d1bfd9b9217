//! rpgFEN encoding.
//!
//! The encoder writes the most compact text the decoder accepts: runs of
//! empty squares become a single integer, blank ranks become empty rank
//! groups, and trailing empties are dropped. Text is not byte-stable across
//! a decode/encode cycle, but the described occupancy is.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::error::NotationError;
use super::layout::{Layout, PieceSpec};
use crate::core::BoardConfig;
use crate::pieces::kind::is_valid_code;

/// Characters that end a token, an entry, a rank group or the board id.
const RESERVED_IN_NOTES: &[char] = &[',', '+', '/', '|'];

/// Encode a layout as rpgFEN.
///
/// Repeated coordinates are merged the same way the decoder merges them.
///
/// # Errors
///
/// - [`NotationError::ReservedCharacter`] if the board id, a code or a note
///   cannot be written without changing its meaning.
/// - [`NotationError::OutOfBounds`] if a placement lies outside `config`.
pub fn encode(layout: &Layout, config: &BoardConfig) -> Result<String, NotationError> {
    if layout
        .board_id
        .chars()
        .any(|c| c == '|' || c.is_whitespace())
    {
        return Err(NotationError::ReservedCharacter {
            field: "board id",
            text: layout.board_id.clone(),
        });
    }

    // Top rank first, then left to right.
    let mut rows: BTreeMap<Reverse<u8>, Vec<(u8, Vec<PieceSpec>)>> = BTreeMap::new();
    for (at, stack) in layout.occupancy() {
        if !config.contains(at) {
            return Err(NotationError::OutOfBounds {
                segment: at.to_string(),
                file: i64::from(at.file),
                rank: i64::from(at.rank),
            });
        }
        rows.entry(Reverse(at.rank)).or_default().push((at.file, stack));
    }

    let mut groups: Vec<String> = Vec::new();
    let mut cursor = i64::from(config.origin_rank);

    for (Reverse(rank), mut squares) in rows {
        let rank = i64::from(rank);
        while cursor > rank {
            groups.push(String::new());
            cursor -= 1;
        }

        let mut group = "\\".repeat((rank - cursor).max(0) as usize);
        squares.sort_by_key(|(file, _)| *file);
        group.push_str(&encode_rank(&squares, config)?);
        groups.push(group);
        cursor = rank - 1;
    }

    Ok(format!("{}|{}", layout.board_id, groups.join("/")))
}

fn encode_rank(squares: &[(u8, Vec<PieceSpec>)], config: &BoardConfig) -> Result<String, NotationError> {
    let mut entries = Vec::with_capacity(squares.len());
    let mut file = i64::from(config.origin_file);

    for (at, stack) in squares {
        let gap = i64::from(*at) - file;
        if gap != 0 {
            entries.push(gap.to_string());
        }
        entries.push(encode_stack(stack)?);
        file = i64::from(*at) + 1;
    }

    Ok(entries.join(","))
}

fn encode_stack(stack: &[PieceSpec]) -> Result<String, NotationError> {
    let mut tokens = Vec::with_capacity(stack.len());
    for spec in stack {
        if !is_valid_code(&spec.code) {
            return Err(NotationError::ReservedCharacter {
                field: "piece code",
                text: spec.code.clone(),
            });
        }
        if let Some(notes) = &spec.notes {
            if notes
                .chars()
                .any(|c| RESERVED_IN_NOTES.contains(&c) || c.is_whitespace())
            {
                return Err(NotationError::ReservedCharacter {
                    field: "notes",
                    text: notes.clone(),
                });
            }
        }
        tokens.push(spec.to_string());
    }
    Ok(tokens.join("+"))
}
