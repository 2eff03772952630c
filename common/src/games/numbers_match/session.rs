use super::blocked::BlockedSet;
use super::events::{ActionFailReason, GameEvent, MatchFailReason, PlayerAction};
use super::generator;
use super::grid::Grid;
use super::hint;
use super::level::LevelProgression;
use super::match_engine::{MatchEngine, MatchRejection};
use super::resources::ResourceLedger;
use super::snapshot::{Snapshot, SnapshotError};
use super::state_machine::{GameState, StateMachine, Transition};
use super::types::{MatchRule, Position, ResourceKind, SessionStats, is_valid_value};
use crate::config::GameConfig;
use crate::games::session_rng::SessionRng;
use crate::{log, log_debug};

/// One player's game. Every public call is a single atomic step that
/// mutates the session and queues events for the host to drain with
/// [`GameSession::take_events`].
pub struct GameSession {
    config: GameConfig,
    engine: MatchEngine,
    progression: LevelProgression,
    rng: SessionRng,
    grid: Grid,
    blocked: BlockedSet,
    resources: ResourceLedger,
    machine: StateMachine,
    level: u32,
    score: u32,
    time_left: u32,
    selected: Option<Position>,
    hint: Option<(Position, Position)>,
    change_mode: bool,
    stats: SessionStats,
    pending_events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(config: GameConfig, mut rng: SessionRng) -> Self {
        let progression = LevelProgression::from_config(&config);
        let rule = MatchRule::new(config.sum_target);
        let grid = generator::playable_grid(
            &mut rng,
            config.grid_columns,
            progression.rows(1),
            rule,
            config.generation_attempts,
        );
        Self::from_grid(config, rng, grid)
    }

    /// Starts an idle level-1 session on a prepared grid.
    pub fn from_grid(config: GameConfig, rng: SessionRng, grid: Grid) -> Self {
        let progression = LevelProgression::from_config(&config);

        Self {
            engine: MatchEngine::new(MatchRule::new(config.sum_target)),
            resources: ResourceLedger::new(config.max_resource_uses),
            time_left: progression.time_budget(1),
            progression,
            rng,
            grid,
            blocked: BlockedSet::new(),
            machine: StateMachine::new(),
            level: 1,
            score: 0,
            selected: None,
            hint: None,
            change_mode: false,
            stats: SessionStats::default(),
            pending_events: Vec::new(),
            config,
        }
    }

    /// Rebuilds a session from a snapshot. A game saved mid-play comes back
    /// paused so the clock does not run before the player resumes.
    pub fn restore(
        config: GameConfig,
        rng: SessionRng,
        snapshot: &Snapshot,
    ) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        let grid = snapshot.build_grid(config.grid_columns)?;

        let mut session = Self::from_grid(config, rng, grid);
        session.blocked = snapshot.build_blocked();
        session.resources.apply_counts(snapshot.resources);
        session.level = snapshot.level;
        session.score = snapshot.score;
        session.time_left = snapshot.time_left;

        let state = match snapshot.state {
            GameState::Playing => GameState::Paused,
            other => other,
        };
        session.machine = StateMachine::with_state(state);

        log!(
            "Restored session: level {}, score {}, {}s left, state {}",
            session.level,
            session.score,
            session.time_left,
            state
        );
        Ok(session)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.rows().to_vec(),
            blocked_cells: self.blocked.iter().map(|pos| [pos.row, pos.col]).collect(),
            resources: self.resources.counts(),
            level: self.level,
            score: self.score,
            time_left: self.time_left,
            state: self.machine.state(),
        }
    }

    pub fn start(&mut self) -> bool {
        self.change_state(GameState::Playing, GameState::Idle)
    }

    pub fn pause(&mut self) -> bool {
        self.change_state(GameState::Paused, GameState::Playing)
    }

    /// A restored grid may already be cleared or stuck, so the level check
    /// runs as soon as play continues.
    pub fn resume(&mut self) -> bool {
        if !self.change_state(GameState::Playing, GameState::Paused) {
            return false;
        }
        self.check_level_completion();
        true
    }

    fn change_state(&mut self, to: GameState, required: GameState) -> bool {
        if self.machine.state() != required {
            return false;
        }
        match self.machine.transition(to) {
            Some(transition) => {
                self.apply_transition(transition);
                true
            }
            None => false,
        }
    }

    /// Discards the current game and returns to an idle level 1.
    pub fn reset(&mut self) {
        let transition = self.machine.reset();
        self.apply_transition(transition);

        self.level = 1;
        self.score = 0;
        self.stats = SessionStats::default();
        self.load_level();

        self.pending_events.push(GameEvent::ScoreChanged(self.score));
        self.pending_events.push(GameEvent::TimeChanged(self.time_left));
        log!("Session reset");
    }

    /// One second of the countdown. Ignored unless playing.
    pub fn tick(&mut self) -> bool {
        if !self.machine.is_playing() {
            return false;
        }

        self.time_left = self.time_left.saturating_sub(1);
        self.pending_events.push(GameEvent::TimeChanged(self.time_left));

        if self.time_left == 0 {
            log!("Time ran out on level {}", self.level);
            self.game_over();
        }
        true
    }

    pub fn cell_selected(&mut self, row: usize, col: usize) {
        if !self.machine.is_playing() || self.change_mode {
            return;
        }

        let pos = Position::new(row, col);
        if !self.grid.contains(pos) || self.blocked.contains(pos) || self.grid.value(pos).is_none()
        {
            return;
        }

        match self.selected {
            None => self.select(Some(pos)),
            Some(previous) if previous == pos => {}
            Some(previous) => self.try_match(previous, pos),
        }
    }

    fn try_match(&mut self, first: Position, second: Position) {
        let outcome = self
            .engine
            .attempt_match(first, second, &mut self.grid, &mut self.blocked);

        match outcome {
            Ok(outcome) => {
                let points = outcome.points;
                self.select(None);
                self.hint = None;
                self.stats.pairs_matched += 1;
                self.score += points;
                self.pending_events.push(GameEvent::MatchSuccess {
                    cells: [first, second],
                    points,
                    path_type: outcome.path_type,
                });

                if !outcome.rows_completed.is_empty() {
                    let cleared = outcome.rows_completed.len() as u32;
                    let bonus = cleared * self.config.row_clear_bonus;
                    self.stats.rows_cleared += cleared;
                    self.score += bonus;
                    self.pending_events.push(GameEvent::RowsCompleted {
                        rows: outcome.rows_completed,
                        bonus,
                    });
                }
                self.pending_events.push(GameEvent::ScoreChanged(self.score));

                self.check_level_completion();
            }
            Err(MatchRejection::ValuesMismatch) => {
                self.fail_match(first, second, MatchFailReason::ValuesMismatch)
            }
            Err(MatchRejection::NoValidPath) => {
                self.fail_match(first, second, MatchFailReason::NoValidPath)
            }
            Err(rejection) => {
                log_debug!("Selection {} replaced after {:?}", first, rejection);
                self.select(Some(second));
            }
        }
    }

    fn fail_match(&mut self, first: Position, second: Position, reason: MatchFailReason) {
        self.pending_events.push(GameEvent::MatchFailed {
            cells: [first, second],
            reason,
        });
        self.select(None);
    }

    fn select(&mut self, pos: Option<Position>) {
        if self.selected != pos {
            self.selected = pos;
            self.pending_events.push(GameEvent::SelectionChanged(pos));
        }
    }

    /// Copies every remaining value to the end of the grid.
    pub fn use_add_cells(&mut self) -> bool {
        let action = PlayerAction::AddCells;
        if !self.machine.is_playing() {
            return self.fail_action(action, ActionFailReason::NotPlaying);
        }
        if !self.resources.can_use(ResourceKind::AddCells) {
            return self.fail_action(action, ActionFailReason::NoResources);
        }

        let values: Vec<u8> = hint::active_cells(&self.grid, &self.blocked)
            .map(|(_, value)| value)
            .collect();
        if values.is_empty() {
            return self.fail_action(action, ActionFailReason::NothingToCopy);
        }
        let Ok(current) = self.resources.try_use(ResourceKind::AddCells) else {
            return self.fail_action(action, ActionFailReason::NoResources);
        };

        let old_row_count = self.grid.row_count();
        self.grid.append_values(&values);
        let new_row_count = self.grid.row_count();

        self.hint = None;
        self.stats.cells_added += values.len() as u32;
        self.pending_events.push(GameEvent::CellsAdded {
            old_row_count,
            new_row_count,
            values,
        });
        self.pending_events.push(GameEvent::ResourceChanged {
            kind: ResourceKind::AddCells,
            current,
        });

        self.check_level_completion();
        true
    }

    /// A use is only spent when a pair is actually shown.
    pub fn use_hint(&mut self) -> Option<(Position, Position)> {
        let action = PlayerAction::Hint;
        if !self.machine.is_playing() {
            self.fail_action(action, ActionFailReason::NotPlaying);
            return None;
        }
        if !self.resources.can_use(ResourceKind::Hint) {
            self.fail_action(action, ActionFailReason::NoResources);
            return None;
        }

        let Some(pair) = hint::find_first_valid_pair(&self.grid, &self.blocked, self.engine.rule())
        else {
            self.fail_action(action, ActionFailReason::NoValidMoves);
            return None;
        };
        let Ok(current) = self.resources.try_use(ResourceKind::Hint) else {
            self.fail_action(action, ActionFailReason::NoResources);
            return None;
        };

        self.hint = Some(pair);
        self.stats.hints_used += 1;
        self.pending_events.push(GameEvent::HintShown([pair.0, pair.1]));
        self.pending_events.push(GameEvent::ResourceChanged {
            kind: ResourceKind::Hint,
            current,
        });
        Some(pair)
    }

    pub fn start_change_mode(&mut self) -> bool {
        let action = PlayerAction::StartChangeMode;
        if !self.machine.is_playing() {
            return self.fail_action(action, ActionFailReason::NotPlaying);
        }
        if !self.resources.can_use(ResourceKind::ChangeValue) {
            return self.fail_action(action, ActionFailReason::NoResources);
        }
        if self.change_mode {
            return true;
        }

        self.select(None);
        self.change_mode = true;
        self.pending_events.push(GameEvent::ChangeModeChanged(true));
        true
    }

    pub fn cancel_change_mode(&mut self) -> bool {
        if !self.change_mode {
            return false;
        }
        self.leave_change_mode();
        true
    }

    fn leave_change_mode(&mut self) {
        if self.change_mode {
            self.change_mode = false;
            self.pending_events.push(GameEvent::ChangeModeChanged(false));
        }
    }

    pub fn commit_change_value(&mut self, row: usize, col: usize, value: u8) -> bool {
        let action = PlayerAction::CommitChangeValue;
        if !self.machine.is_playing() {
            return self.fail_action(action, ActionFailReason::NotPlaying);
        }
        if !self.change_mode {
            return self.fail_action(action, ActionFailReason::NotInChangeMode);
        }
        if !is_valid_value(value) {
            return self.fail_action(action, ActionFailReason::InvalidValue);
        }

        let cell = Position::new(row, col);
        let old_value = match self.grid.value(cell) {
            Some(old_value) if !self.blocked.contains(cell) => old_value,
            _ => return self.fail_action(action, ActionFailReason::InvalidCell),
        };
        let Ok(current) = self.resources.try_use(ResourceKind::ChangeValue) else {
            self.leave_change_mode();
            return self.fail_action(action, ActionFailReason::NoResources);
        };

        self.grid.set(cell, Some(value));
        self.hint = None;
        self.stats.values_changed += 1;
        self.pending_events.push(GameEvent::ValueChanged {
            cell,
            old_value,
            new_value: value,
        });
        self.pending_events.push(GameEvent::ResourceChanged {
            kind: ResourceKind::ChangeValue,
            current,
        });
        self.leave_change_mode();

        self.check_level_completion();
        true
    }

    fn fail_action(&mut self, action: PlayerAction, reason: ActionFailReason) -> bool {
        self.pending_events.push(GameEvent::ActionFailed { action, reason });
        false
    }

    /// Advances the level when the grid is cleared, or ends the game when no
    /// move exists and no resource can create one.
    pub fn check_level_completion(&mut self) {
        if !self.machine.is_playing() {
            return;
        }

        if self.grid.is_empty() || hint::active_cell_count(&self.grid, &self.blocked) == 0 {
            self.level_up();
            return;
        }

        if hint::has_any_valid_move(&self.grid, &self.blocked, self.engine.rule()) {
            return;
        }
        if self.resources.can_use(ResourceKind::AddCells)
            || self.resources.can_use(ResourceKind::ChangeValue)
        {
            return;
        }

        log!("No moves left on level {}", self.level);
        self.game_over();
    }

    fn level_up(&mut self) {
        self.pending_events.push(GameEvent::LevelComplete(self.level));
        self.level += 1;
        self.load_level();

        log!(
            "Level {} started: {} rows, {}s, score {}",
            self.level,
            self.grid.row_count(),
            self.time_left,
            self.score
        );

        self.pending_events.push(GameEvent::LevelUp(self.level));
        for kind in ResourceKind::ALL {
            self.pending_events.push(GameEvent::ResourceChanged {
                kind,
                current: self.resources.current(kind),
            });
        }
        self.pending_events.push(GameEvent::TimeChanged(self.time_left));
    }

    /// Fresh grid, full resources and the level's time budget.
    fn load_level(&mut self) {
        self.grid = generator::playable_grid(
            &mut self.rng,
            self.config.grid_columns,
            self.progression.rows(self.level),
            self.engine.rule(),
            self.config.generation_attempts,
        );
        self.blocked.clear();
        self.resources.reset_all();
        self.time_left = self.progression.time_budget(self.level);
        self.hint = None;
        self.select(None);
        self.leave_change_mode();
    }

    fn game_over(&mut self) {
        let Some(transition) = self.machine.transition(GameState::GameOver) else {
            return;
        };
        self.select(None);
        self.leave_change_mode();
        self.hint = None;
        self.apply_transition(transition);
        self.pending_events.push(GameEvent::GameOver {
            score: self.score,
            level: self.level,
        });
        log!("Game over: score {}, level {}", self.score, self.level);
    }

    fn apply_transition(&mut self, transition: Transition) {
        log_debug!("State {} -> {}", transition.from, transition.to);
        self.pending_events.push(GameEvent::StateChanged(transition.to));
        for command in transition.timer_commands {
            self.pending_events.push(GameEvent::Timer(command));
        }
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.machine.state()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn blocked(&self) -> &BlockedSet {
        &self.blocked
    }

    pub fn resources(&self) -> &ResourceLedger {
        &self.resources
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn hint(&self) -> Option<(Position, Position)> {
        self.hint
    }

    pub fn is_change_mode(&self) -> bool {
        self.change_mode
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
