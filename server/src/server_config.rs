use std::time::Duration;

pub const TIMER_TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_CONFIG_PATH: &str = "tilematch.yaml";
pub const DEFAULT_SAVE_PATH: &str = "tilematch_save.yaml";
