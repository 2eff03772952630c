use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Idle => "idle",
            GameState::Playing => "playing",
            GameState::Paused => "paused",
            GameState::GameOver => "gameOver",
        };
        f.write_str(name)
    }
}

/// Instructions for the external countdown timer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerCommand {
    Start,
    Pause,
    Stop,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: GameState,
    pub to: GameState,
    pub timer_commands: Vec<TimerCommand>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateMachine {
    state: GameState,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a persisted state without emitting anything.
    pub fn with_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn can_transition(&self, to: GameState) -> bool {
        matches!(
            (self.state, to),
            (GameState::Idle, GameState::Playing)
                | (GameState::Playing, GameState::Paused)
                | (GameState::Paused, GameState::Playing)
                | (GameState::Playing, GameState::GameOver)
        )
    }

    /// Returns `None` and leaves the state alone when the edge is not allowed.
    pub fn transition(&mut self, to: GameState) -> Option<Transition> {
        if !self.can_transition(to) {
            return None;
        }
        Some(self.enter(to))
    }

    /// Forces the machine back to `Idle` from any state.
    pub fn reset(&mut self) -> Transition {
        self.enter(GameState::Idle)
    }

    fn enter(&mut self, to: GameState) -> Transition {
        let from = self.state;
        let mut timer_commands = Vec::new();

        if from == GameState::Playing && to != GameState::Playing {
            timer_commands.push(TimerCommand::Pause);
        }
        match to {
            GameState::Playing => timer_commands.push(TimerCommand::Start),
            GameState::GameOver => timer_commands.push(TimerCommand::Stop),
            GameState::Idle if matches!(from, GameState::Playing | GameState::Paused) => {
                timer_commands.push(TimerCommand::Stop);
            }
            GameState::Idle | GameState::Paused => {}
        }

        self.state = to;
        Transition {
            from,
            to,
            timer_commands,
        }
    }
}
