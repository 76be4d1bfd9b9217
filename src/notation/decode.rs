//! rpgFEN decoding.
//!
//! ```text
//! position  := boardId '|' rankGroup ( '/' rankGroup )*
//! rankGroup := '\'* entry ( ',' entry )*
//! entry     := token ( '+' token )*
//! token     := integer | code ( ';' notes )?
//! ```
//!
//! ## Cursor Rules
//!
//! The cursor starts at the board's origin (top playable rank, first
//! playable file).
//!
//! - Each rank group ends by moving one rank down and back to the origin
//!   file.
//! - A run of `k` leading backslashes moves the cursor `k` ranks *up*
//!   before the group is laid out, so a single `\` redescribes the rank
//!   just finished.
//! - Each `,` entry advances the file by one after it is laid out.
//! - An integer `n` advances the file by `n` in total (`n` empty squares);
//!   negative values move left.
//! - Pieces joined by `+` share one square, the first listed on top.
//!
//! An empty rank group is a blank rank. A square described twice gets the
//! later pieces beneath the earlier ones.

use rustc_hash::FxHashMap;

use super::error::NotationError;
use super::layout::{Layout, PieceSpec, Placement};
use crate::core::{BoardConfig, Coordinate};
use crate::pieces::kind::is_valid_code;
use crate::pieces::PieceVocabulary;

enum Token {
    Skip(i64),
    Piece(PieceSpec),
}

/// Decode an rpgFEN position.
///
/// Whitespace anywhere in `text` is ignored. Piece codes are checked
/// against `vocabulary`. The first error aborts decoding.
///
/// ```
/// use column_chess::core::{BoardConfig, Coordinate};
/// use column_chess::notation::decode;
/// use column_chess::pieces::PieceKindRegistry;
///
/// let layout = decode("1|g,3,r", &BoardConfig::standard(8, 8), &PieceKindRegistry::standard()).unwrap();
///
/// assert_eq!(layout.board_id, "1");
/// assert_eq!(layout.placements[0].at, Coordinate::new(0, 7)); // a8
/// assert_eq!(layout.placements[1].at, Coordinate::new(4, 7)); // e8
/// ```
pub fn decode(
    text: &str,
    config: &BoardConfig,
    vocabulary: &(impl PieceVocabulary + ?Sized),
) -> Result<Layout, NotationError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let (board_id, rank_list) = compact
        .split_once('|')
        .ok_or(NotationError::MissingBoardSeparator)?;

    let mut layout = Layout::new(board_id);
    let mut index: FxHashMap<Coordinate, usize> = FxHashMap::default();
    let mut rank = i64::from(config.origin_rank);

    for group in rank_list.split('/') {
        let body = group.trim_start_matches('\\');
        rank += (group.len() - body.len()) as i64;

        let mut file = i64::from(config.origin_file);
        if !body.is_empty() {
            for entry in body.split(',') {
                let mut stack = Vec::new();
                for token in entry.split('+') {
                    match parse_token(token, group, vocabulary)? {
                        Token::Skip(n) => {
                            place(&mut layout, &mut index, config, group, file, rank, &mut stack)?;
                            file += n - 1;
                        }
                        Token::Piece(spec) => stack.push(spec),
                    }
                }
                place(&mut layout, &mut index, config, group, file, rank, &mut stack)?;
                file += 1;
            }
        }

        rank -= 1;
    }

    Ok(layout)
}

/// Decode a single `+`-joined stack such as `"g+G;captain"`.
///
/// Integers are not allowed here.
pub fn decode_stack(
    entry: &str,
    vocabulary: &(impl PieceVocabulary + ?Sized),
) -> Result<Vec<PieceSpec>, NotationError> {
    let compact: String = entry.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split('+')
        .map(|token| match parse_token(token, &compact, vocabulary)? {
            Token::Piece(spec) => Ok(spec),
            Token::Skip(_) => Err(NotationError::UnrecognizedToken {
                segment: compact.clone(),
                token: token.to_string(),
            }),
        })
        .collect()
}

fn parse_token(
    token: &str,
    segment: &str,
    vocabulary: &(impl PieceVocabulary + ?Sized),
) -> Result<Token, NotationError> {
    let (head, notes) = match token.split_once(';') {
        Some((head, notes)) => (head, Some(notes)),
        None => (token, None),
    };

    if notes.is_none() {
        if let Ok(n) = head.parse::<i32>() {
            return Ok(Token::Skip(i64::from(n)));
        }
    }

    if !is_valid_code(head) {
        return Err(NotationError::UnrecognizedToken {
            segment: segment.to_string(),
            token: token.to_string(),
        });
    }
    if !vocabulary.recognizes(head) {
        return Err(NotationError::UnknownPieceId {
            segment: segment.to_string(),
            token: head.to_string(),
        });
    }

    Ok(Token::Piece(PieceSpec {
        code: head.to_string(),
        notes: notes.filter(|n| !n.is_empty()).map(str::to_string),
    }))
}

/// Flush the pending stack onto the square under the cursor.
fn place(
    layout: &mut Layout,
    index: &mut FxHashMap<Coordinate, usize>,
    config: &BoardConfig,
    segment: &str,
    file: i64,
    rank: i64,
    stack: &mut Vec<PieceSpec>,
) -> Result<(), NotationError> {
    if stack.is_empty() {
        return Ok(());
    }

    let at = i32::try_from(file)
        .ok()
        .zip(i32::try_from(rank).ok())
        .and_then(|(f, r)| config.checked(f, r).ok())
        .ok_or_else(|| NotationError::OutOfBounds {
            segment: segment.to_string(),
            file,
            rank,
        })?;

    let pieces = std::mem::take(stack);
    match index.get(&at) {
        Some(&i) => layout.placements[i].stack.extend(pieces),
        None => {
            index.insert(at, layout.placements.len());
            layout.placements.push(Placement { at, stack: pieces });
        }
    }
    Ok(())
}
