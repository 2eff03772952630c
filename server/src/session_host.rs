use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use tilematch_common::games::numbers_match::{GameEvent, GameSession, TimerCommand, save_snapshot};
use tilematch_common::{log, log_warn};

use crate::commands::{HELP_TEXT, HostCommand};
use crate::render::render_session;

pub enum HandleResult {
    Continue,
    Quit,
}

/// Serialises every call on the session behind one lock and forwards the
/// resulting events to the log and the countdown timer.
#[derive(Clone)]
pub struct SessionHost {
    session: Arc<Mutex<GameSession>>,
    timer_running: Arc<watch::Sender<bool>>,
    save_path: PathBuf,
}

impl SessionHost {
    pub fn new(session: GameSession, save_path: PathBuf) -> (Self, watch::Receiver<bool>) {
        let (timer_running, timer_receiver) = watch::channel(false);
        let host = Self {
            session: Arc::new(Mutex::new(session)),
            timer_running: Arc::new(timer_running),
            save_path,
        };
        (host, timer_receiver)
    }

    pub async fn handle_command(&self, command: HostCommand) -> HandleResult {
        let mut session = self.session.lock().await;

        match command {
            HostCommand::Start => {
                if !session.start() {
                    log_warn!("Cannot start while {}", session.state());
                }
            }
            HostCommand::Pause => {
                if !session.pause() {
                    log_warn!("Cannot pause while {}", session.state());
                }
            }
            HostCommand::Resume => {
                if !session.resume() {
                    log_warn!("Cannot resume while {}", session.state());
                }
            }
            HostCommand::Reset => session.reset(),
            HostCommand::Press { row, col } => session.cell_selected(row, col),
            HostCommand::AddCells => {
                session.use_add_cells();
            }
            HostCommand::Hint => {
                session.use_hint();
            }
            HostCommand::Change => {
                session.start_change_mode();
            }
            HostCommand::Commit { row, col, value } => {
                session.commit_change_value(row, col, value);
            }
            HostCommand::Cancel => {
                if !session.cancel_change_mode() {
                    log_warn!("Not in change mode");
                }
            }
            HostCommand::Save => match save_snapshot(&session.snapshot(), &self.save_path) {
                Ok(()) => log!("Saved game to {}", self.save_path.display()),
                Err(e) => log_warn!("Failed to save game to {}: {}", self.save_path.display(), e),
            },
            HostCommand::Show => print!("{}", render_session(&session)),
            HostCommand::Help => println!("{}", HELP_TEXT),
            HostCommand::Quit => return HandleResult::Quit,
        }

        self.dispatch_events(&mut session);
        HandleResult::Continue
    }

    pub async fn tick(&self) {
        let mut session = self.session.lock().await;
        session.tick();
        self.dispatch_events(&mut session);
    }

    fn dispatch_events(&self, session: &mut GameSession) {
        for event in session.take_events() {
            match event {
                GameEvent::Timer(command) => {
                    self.timer_running.send_replace(command == TimerCommand::Start);
                }
                // Countdown is logged every ten seconds.
                GameEvent::TimeChanged(time_left) if time_left % 10 != 0 => {}
                GameEvent::GameOver { .. } => log!("*** {} ***", event),
                _ => log!("{}", event),
            }
        }
    }
}
