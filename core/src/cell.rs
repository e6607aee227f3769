use serde::{Deserialize, Serialize};

/// Hidden content of a cell, fixed once the minefield is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Truth {
    Mine,
    Count(u8),
}

impl Truth {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for Truth {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Hidden,
    Flagged,
    Revealed(Truth),
}

impl Overlay {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::Hidden
    }
}
