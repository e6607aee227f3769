#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use history::*;
pub use minefield::*;
pub use state::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod history;
mod minefield;
mod state;
mod types;

/// Cells kept free of mines around the first reveal.
pub const SAFE_ZONE_CELLS: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    /// 10×10 board with 20 mines.
    pub const DEFAULT: Self = Self::new_unchecked((10, 10), 20);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        let max = mult(size.0, size.1).saturating_sub(SAFE_ZONE_CELLS);
        if mines > max {
            return Err(GameError::TooManyMines { max });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// A flagged cell absorbed the reveal and lost its flag.
    Unflagged,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Unflagged => true,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }

    /// Whether the move went onto the undo history.
    pub const fn is_move(self) -> bool {
        matches!(self, Self::Revealed | Self::HitMine | Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    NoChange,
    Restored,
}

impl UndoOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Restored)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}
