use serde::{Deserialize, Serialize};

use super::Validate;

/// Tunables for a game session. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_columns: usize,
    pub base_rows: usize,
    pub sum_target: u8,
    pub base_time_budget: u32,
    pub time_decrement_per_level: u32,
    pub min_time_budget: u32,
    pub max_resource_uses: u32,
    pub row_clear_bonus: u32,
    pub generation_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_columns: 9,
            base_rows: 4,
            sum_target: 10,
            base_time_budget: 420,
            time_decrement_per_level: 30,
            min_time_budget: 120,
            max_resource_uses: 5,
            row_clear_bonus: 10,
            generation_attempts: 32,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_columns < 2 {
            return Err("grid_columns must be at least 2".to_string());
        }
        if self.base_rows == 0 {
            return Err("base_rows must be at least 1".to_string());
        }
        if !(2..=18).contains(&self.sum_target) {
            return Err(format!(
                "sum_target must be between 2 and 18, got {}",
                self.sum_target
            ));
        }
        if self.min_time_budget == 0 {
            return Err("min_time_budget must be greater than 0".to_string());
        }
        if self.min_time_budget > self.base_time_budget {
            return Err(format!(
                "min_time_budget ({}) must not exceed base_time_budget ({})",
                self.min_time_budget, self.base_time_budget
            ));
        }
        if self.max_resource_uses == 0 {
            return Err("max_resource_uses must be greater than 0".to_string());
        }
        Ok(())
    }
}
