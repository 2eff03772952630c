mod commands;
mod render;
mod server_config;
mod session_host;
mod timer_task;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use tilematch_common::config::{ConfigManager, FileContentConfigProvider, GameConfig};
use tilematch_common::games::SessionRng;
use tilematch_common::games::numbers_match::{GameSession, load_snapshot};
use tilematch_common::logger::{self, LogLevel};
use tilematch_common::{log, log_warn};

use commands::{HELP_TEXT, parse_command};
use server_config::{DEFAULT_CONFIG_PATH, DEFAULT_SAVE_PATH, TIMER_TICK_INTERVAL};
use session_host::{HandleResult, SessionHost};
use timer_task::TimerTask;

#[derive(Parser)]
#[command(name = "tilematch_server")]
struct Args {
    /// YAML game config; defaults apply when the file does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long)]
    seed: Option<u64>,

    /// Where `save` writes the snapshot
    #[arg(long, default_value = DEFAULT_SAVE_PATH)]
    save: PathBuf,

    /// Resume from a saved snapshot
    #[arg(long)]
    load: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TileMatch".to_string())
    } else {
        None
    };
    let level = if args.debug { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config_manager: ConfigManager<FileContentConfigProvider, GameConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let session = match &args.load {
        Some(path) => {
            let snapshot = load_snapshot(path)?;
            log!("Loaded game from {}", path.display());
            GameSession::restore(config, rng, &snapshot)?
        }
        None => GameSession::new(config, rng),
    };

    let (host, timer_running) = SessionHost::new(session, args.save);
    let timer = TimerTask::new(host.clone(), timer_running, TIMER_TICK_INTERVAL);
    let timer_handle = tokio::spawn(timer.run());

    log!("{}", HELP_TEXT);
    host.handle_command(commands::HostCommand::Show).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                log!("Interrupted");
                break;
            }
        };

        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                if let HandleResult::Quit = host.handle_command(command).await {
                    break;
                }
            }
            Err(e) => log_warn!("{}", e),
        }
    }

    timer_handle.abort();
    log!("Bye");

    Ok(())
}
