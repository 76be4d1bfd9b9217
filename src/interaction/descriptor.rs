//! Move descriptors.
//!
//! A descriptor is the text form of a move handed to listeners:
//! `from-to` for a plain move or merge, `from-to-returnTo` when the moving
//! column comes back after capturing (`e4-f5-e4`) or when the target column
//! absorbs the mover (`f5-e4-f5`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, StackError};

/// One move as `from-to[-returnTo]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDescriptor {
    pub from: Coordinate,
    pub to: Coordinate,
    pub return_to: Option<Coordinate>,
}

impl MoveDescriptor {
    /// A one-way move.
    #[must_use]
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            return_to: None,
        }
    }

    /// A move that ends on `return_to` (builder pattern).
    #[must_use]
    pub const fn returning_to(mut self, return_to: Coordinate) -> Self {
        self.return_to = Some(return_to);
        self
    }

    /// Square the moving column ends on.
    #[must_use]
    pub fn destination(&self) -> Coordinate {
        self.return_to.unwrap_or(self.to)
    }
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(back) = self.return_to {
            write!(f, "-{back}")?;
        }
        Ok(())
    }
}

impl FromStr for MoveDescriptor {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .split('-')
            .map(str::parse)
            .collect::<Result<Vec<Coordinate>, _>>()?;

        match squares[..] {
            [from, to] => Ok(Self::new(from, to)),
            [from, to, back] => Ok(Self::new(from, to).returning_to(back)),
            _ => Err(StackError::MalformedCoordinate(s.to_string())),
        }
    }
}
