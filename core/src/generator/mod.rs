use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

pub trait MinefieldGenerator {
    /// Produces a minefield for `config`, keeping the 3×3 block around `safe` free of mines where the
    /// strategy allows it.
    fn generate(&mut self, config: &GameConfig, safe: Coord2) -> Minefield;
}
