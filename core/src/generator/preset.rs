use super::*;

/// Always hands out the same layout, ignoring the safe start.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetGenerator {
    minefield: Minefield,
}

impl PresetGenerator {
    pub fn new(minefield: Minefield) -> Self {
        Self { minefield }
    }

    pub fn config(&self) -> GameConfig {
        self.minefield.game_config()
    }
}

impl MinefieldGenerator for PresetGenerator {
    fn generate(&mut self, config: &GameConfig, _safe: Coord2) -> Minefield {
        if *config != self.minefield.game_config() {
            log::warn!(
                "Preset layout {:?} does not match requested config {:?}",
                self.minefield.game_config(),
                config
            );
        }
        self.minefield.clone()
    }
}
