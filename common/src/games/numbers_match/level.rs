use crate::config::GameConfig;

/// Grid height and time budget as functions of the level number (1-based).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LevelProgression {
    base_rows: usize,
    base_time: u32,
    time_decrement: u32,
    min_time: u32,
}

impl LevelProgression {
    pub fn new(base_rows: usize, base_time: u32, time_decrement: u32, min_time: u32) -> Self {
        Self {
            base_rows,
            base_time,
            time_decrement,
            min_time,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.base_rows,
            config.base_time_budget,
            config.time_decrement_per_level,
            config.min_time_budget,
        )
    }

    pub fn rows(&self, level: u32) -> usize {
        self.base_rows + level.saturating_sub(1) as usize
    }

    /// Seconds allowed for `level`.
    pub fn time_budget(&self, level: u32) -> u32 {
        let spent = level.saturating_sub(1).saturating_mul(self.time_decrement);
        self.base_time.saturating_sub(spent).max(self.min_time)
    }
}
