use std::fmt;

use super::state_machine::{GameState, TimerCommand};
use super::types::{PathType, Position, ResourceKind};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatchFailReason {
    ValuesMismatch,
    NoValidPath,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayerAction {
    AddCells,
    Hint,
    StartChangeMode,
    CommitChangeValue,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionFailReason {
    NoResources,
    NotPlaying,
    NoValidMoves,
    NothingToCopy,
    NotInChangeMode,
    InvalidCell,
    InvalidValue,
}

/// Everything the session reports back to its host, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    StateChanged(GameState),
    Timer(TimerCommand),
    SelectionChanged(Option<Position>),
    MatchSuccess {
        cells: [Position; 2],
        points: u32,
        path_type: PathType,
    },
    MatchFailed {
        cells: [Position; 2],
        reason: MatchFailReason,
    },
    RowsCompleted {
        rows: Vec<usize>,
        bonus: u32,
    },
    CellsAdded {
        old_row_count: usize,
        new_row_count: usize,
        values: Vec<u8>,
    },
    ChangeModeChanged(bool),
    ValueChanged {
        cell: Position,
        old_value: u8,
        new_value: u8,
    },
    LevelComplete(u32),
    LevelUp(u32),
    GameOver {
        score: u32,
        level: u32,
    },
    HintShown([Position; 2]),
    ResourceChanged {
        kind: ResourceKind,
        current: u32,
    },
    ScoreChanged(u32),
    TimeChanged(u32),
    ActionFailed {
        action: PlayerAction,
        reason: ActionFailReason,
    },
}

impl fmt::Display for MatchFailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFailReason::ValuesMismatch => f.write_str("valuesMismatch"),
            MatchFailReason::NoValidPath => f.write_str("noValidPath"),
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerAction::AddCells => "addCells",
            PlayerAction::Hint => "hint",
            PlayerAction::StartChangeMode => "startChangeMode",
            PlayerAction::CommitChangeValue => "commitChangeValue",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ActionFailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionFailReason::NoResources => "noResources",
            ActionFailReason::NotPlaying => "notPlaying",
            ActionFailReason::NoValidMoves => "noValidMoves",
            ActionFailReason::NothingToCopy => "nothingToCopy",
            ActionFailReason::NotInChangeMode => "notInChangeMode",
            ActionFailReason::InvalidCell => "invalidCell",
            ActionFailReason::InvalidValue => "invalidValue",
        };
        f.write_str(name)
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::StateChanged(state) => write!(f, "stateChanged {}", state),
            GameEvent::Timer(command) => write!(f, "timer {:?}", command),
            GameEvent::SelectionChanged(Some(pos)) => write!(f, "selected {}", pos),
            GameEvent::SelectionChanged(None) => write!(f, "selection cleared"),
            GameEvent::MatchSuccess {
                cells,
                points,
                path_type,
            } => write!(
                f,
                "matchSuccess {} {} via {} (+{})",
                cells[0],
                cells[1],
                path_type.name(),
                points
            ),
            GameEvent::MatchFailed { cells, reason } => {
                write!(f, "matchFailed {} {}: {}", cells[0], cells[1], reason)
            }
            GameEvent::RowsCompleted { rows, bonus } => {
                write!(f, "rowsCompleted {:?} (+{})", rows, bonus)
            }
            GameEvent::CellsAdded {
                old_row_count,
                new_row_count,
                values,
            } => write!(
                f,
                "cellsAdded {} values, rows {} -> {}",
                values.len(),
                old_row_count,
                new_row_count
            ),
            GameEvent::ChangeModeChanged(active) => write!(f, "changeMode {}", active),
            GameEvent::ValueChanged {
                cell,
                old_value,
                new_value,
            } => write!(f, "valueChanged {} {} -> {}", cell, old_value, new_value),
            GameEvent::LevelComplete(level) => write!(f, "levelComplete {}", level),
            GameEvent::LevelUp(level) => write!(f, "levelUp {}", level),
            GameEvent::GameOver { score, level } => {
                write!(f, "gameOver score {} level {}", score, level)
            }
            GameEvent::HintShown(cells) => write!(f, "hintShown {} {}", cells[0], cells[1]),
            GameEvent::ResourceChanged { kind, current } => {
                write!(f, "resourceChanged {} {}", kind, current)
            }
            GameEvent::ScoreChanged(score) => write!(f, "scoreChanged {}", score),
            GameEvent::TimeChanged(time_left) => write!(f, "timeLeft {}", time_left),
            GameEvent::ActionFailed { action, reason } => {
                write!(f, "actionFailed {}: {}", action, reason)
            }
        }
    }
}
