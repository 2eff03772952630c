mod blocked;
mod connection;
mod events;
mod generator;
mod grid;
mod hint;
mod level;
mod match_engine;
mod resources;
mod session;
mod snapshot;
mod state_machine;
mod types;

pub use blocked::BlockedSet;
pub use connection::validate;
pub use events::{ActionFailReason, GameEvent, MatchFailReason, PlayerAction};
pub use generator::{playable_grid, random_grid};
pub use grid::{Grid, RowWidthMismatch};
pub use hint::{active_cell_count, active_cells, find_first_valid_pair, has_any_valid_move};
pub use level::LevelProgression;
pub use match_engine::{MatchEngine, MatchOutcome, MatchRejection, compact_completed_rows};
pub use resources::{ResourceCounter, ResourceCounts, ResourceExhausted, ResourceLedger};
pub use session::GameSession;
pub use snapshot::{Snapshot, SnapshotError, load_snapshot, save_snapshot};
pub use state_machine::{GameState, StateMachine, TimerCommand, Transition};
pub use types::{
    Cell, MAX_CELL_VALUE, MIN_CELL_VALUE, MatchResult, MatchRule, PathType, Position, ResourceKind,
    SessionStats, is_valid_value,
};
