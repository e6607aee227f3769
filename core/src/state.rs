use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// The whole game model: lazily generated truth grid, player overlay, and undo history.
///
/// Every command is total. Out-of-bounds coordinates and moves made after the game ended are no-ops and report
/// `NoChange`.
#[derive(Clone, Debug)]
pub struct GameState<G = RandomGenerator> {
    config: GameConfig,
    generator: G,
    minefield: Option<Minefield>,
    overlay: Array2<Overlay>,
    active: bool,
    history: History<Array2<Overlay>>,
}

impl GameState<RandomGenerator> {
    /// Default 10×10 game with mines drawn from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::DEFAULT, RandomGenerator::new(seed))
    }
}

impl GameState<PresetGenerator> {
    /// Game that plays `minefield` on every round, wherever the first reveal lands.
    pub fn with_preset(minefield: Minefield) -> Self {
        let generator = PresetGenerator::new(minefield);
        Self::new(generator.config(), generator)
    }
}

impl<G: MinefieldGenerator> GameState<G> {
    pub fn new(config: GameConfig, generator: G) -> Self {
        Self {
            config,
            generator,
            minefield: None,
            overlay: Array2::default(config.size.to_nd_index()),
            active: true,
            history: History::new(),
        }
    }

    /// Starts over: mines are dropped and regenerated on the next reveal, everything is hidden again and the
    /// history is emptied.
    pub fn reset(&mut self) {
        self.minefield = None;
        self.overlay.fill(Overlay::Hidden);
        self.active = true;
        self.history.clear();
        log::debug!("game reset");
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        let Ok(coords) = self.config.validate_coords(coords) else {
            return NoChange;
        };
        if !self.active {
            return NoChange;
        }

        let Some(truth) = self.ensure_minefield(coords).map(|minefield| minefield[coords]) else {
            return NoChange;
        };

        match self.overlay[coords.to_nd_index()] {
            Overlay::Revealed(_) => return NoChange,
            Overlay::Flagged => {
                self.overlay[coords.to_nd_index()] = Overlay::Hidden;
                log::trace!("reveal {:?} removed flag", coords);
                return Unflagged;
            }
            Overlay::Hidden => {}
        }

        self.history.push(self.overlay.clone());
        self.overlay[coords.to_nd_index()] = Overlay::Revealed(truth);
        log::trace!("reveal {:?}: {:?}", coords, truth);

        let outcome = match truth {
            Truth::Mine => {
                self.active = false;
                log::debug!("mine hit at {:?}, game lost", coords);
                HitMine
            }
            Truth::Count(0) => {
                self.flood_from(coords);
                Revealed
            }
            Truth::Count(_) => Revealed,
        };

        if self.check_winner() {
            self.active = false;
            if outcome != HitMine {
                log::debug!("all safe cells revealed, game won");
                return Won;
            }
        }
        outcome
    }

    /// Plants a flag on a hidden cell. Flags only come off through `reveal`.
    pub fn flag(&mut self, coords: Coord2) -> MarkOutcome {
        let Ok(coords) = self.config.validate_coords(coords) else {
            return MarkOutcome::NoChange;
        };
        if !self.active {
            return MarkOutcome::NoChange;
        }

        if self.overlay[coords.to_nd_index()] != Overlay::Hidden {
            return MarkOutcome::NoChange;
        }

        self.history.push(self.overlay.clone());
        self.overlay[coords.to_nd_index()] = Overlay::Flagged;
        log::trace!("flag {:?}", coords);
        MarkOutcome::Changed
    }

    /// Restores the overlay from before the last move. Any successful undo reactivates the game, even when the
    /// restored board is itself finished.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(previous) = self.history.pop() else {
            return UndoOutcome::NoChange;
        };
        self.overlay = previous;
        self.active = true;
        log::trace!("undo, {} moves left in history", self.history.depth());
        UndoOutcome::Restored
    }

    /// True iff every cell without a mine is revealed. Always false before the mines exist.
    pub fn check_winner(&self) -> bool {
        let Some(minefield) = &self.minefield else {
            return false;
        };
        self.overlay
            .iter()
            .zip(minefield.cells().iter())
            .all(|(overlay, truth)| truth.is_mine() || overlay.is_revealed())
    }

    pub fn is_won(&self) -> bool {
        self.check_winner()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_first_move(&self) -> bool {
        self.minefield.is_none()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if !self.active {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Overlay at `coords`, `None` when out of bounds.
    pub fn cell(&self, coords: Coord2) -> Option<Overlay> {
        self.overlay.get(coords.to_nd_index()).copied()
    }

    pub fn overlay(&self) -> &Array2<Overlay> {
        &self.overlay
    }

    /// Copy of the truth grid; all `Count(0)` until the first reveal generates the mines.
    pub fn board_snapshot(&self) -> Array2<Truth> {
        match &self.minefield {
            Some(minefield) => minefield.cells().clone(),
            None => Array2::default(self.config.size.to_nd_index()),
        }
    }

    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn flag_count(&self) -> CellCount {
        self.overlay
            .iter()
            .filter(|&&cell| cell == Overlay::Flagged)
            .count() as CellCount
    }

    /// Generates the mines on first use. A field whose size disagrees with the config is discarded and the game
    /// stays ungenerated.
    fn ensure_minefield(&mut self, safe: Coord2) -> Option<&Minefield> {
        if self.minefield.is_none() {
            let minefield = self.generator.generate(&self.config, safe);
            if minefield.size() != self.config.size {
                log::warn!(
                    "Generated minefield size {:?} does not match board size {:?}, ignoring",
                    minefield.size(),
                    self.config.size
                );
                return None;
            }
            log::debug!(
                "generated {} mines around safe start {:?}",
                minefield.mine_count(),
                safe
            );
            self.minefield = Some(minefield);
        }
        self.minefield.as_ref()
    }

    /// Spreads a reveal out from a zero cell. Each visited cell gets the same treatment a direct reveal would
    /// give it, minus the history push: revealed cells are skipped and flags are taken off without revealing.
    fn flood_from(&mut self, origin: Coord2) {
        let Some(minefield) = &self.minefield else {
            return;
        };

        let mut pending: Vec<Coord2> = self.overlay.iter_neighbors(origin).collect();
        let mut opened = 0usize;

        while let Some(coords) = pending.pop() {
            let cell = &mut self.overlay[coords.to_nd_index()];
            match *cell {
                Overlay::Revealed(_) => continue,
                Overlay::Flagged => {
                    *cell = Overlay::Hidden;
                    continue;
                }
                Overlay::Hidden => {}
            }

            let truth = minefield[coords];
            *cell = Overlay::Revealed(truth);
            opened += 1;

            if truth == Truth::Count(0) {
                let overlay = &self.overlay;
                pending.extend(
                    overlay
                        .iter_neighbors(coords)
                        .filter(|&pos| !overlay[pos.to_nd_index()].is_revealed()),
                );
            }
        }

        log::trace!("flood from {:?} opened {} more cells", origin, opened);
    }
}
