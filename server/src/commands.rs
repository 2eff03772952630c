/// A line typed on the host's stdin.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HostCommand {
    Start,
    Pause,
    Resume,
    Reset,
    Press { row: usize, col: usize },
    AddCells,
    Hint,
    Change,
    Commit { row: usize, col: usize, value: u8 },
    Cancel,
    Save,
    Show,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "commands: start | pause | resume | reset | press <row> <col> | \
add | hint | change | commit <row> <col> <value> | cancel | save | show | help | quit";

pub fn parse_command(line: &str) -> Result<HostCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        return Err("Empty command".to_string());
    };
    let args: Vec<&str> = parts.collect();

    let command = match name.to_ascii_lowercase().as_str() {
        "start" => HostCommand::Start,
        "pause" => HostCommand::Pause,
        "resume" => HostCommand::Resume,
        "reset" => HostCommand::Reset,
        "press" | "p" => {
            expect_args(name, &args, 2)?;
            HostCommand::Press {
                row: parse_arg(args[0], "row")?,
                col: parse_arg(args[1], "col")?,
            }
        }
        "add" => HostCommand::AddCells,
        "hint" => HostCommand::Hint,
        "change" => HostCommand::Change,
        "commit" => {
            expect_args(name, &args, 3)?;
            HostCommand::Commit {
                row: parse_arg(args[0], "row")?,
                col: parse_arg(args[1], "col")?,
                value: parse_arg(args[2], "value")?,
            }
        }
        "cancel" => HostCommand::Cancel,
        "save" => HostCommand::Save,
        "show" => HostCommand::Show,
        "help" | "?" => HostCommand::Help,
        "quit" | "exit" => HostCommand::Quit,
        other => return Err(format!("Unknown command '{}'", other)),
    };

    let takes_args = matches!(command, HostCommand::Press { .. } | HostCommand::Commit { .. });
    if !takes_args && !args.is_empty() {
        return Err(format!("'{}' takes no arguments", name));
    }
    Ok(command)
}

fn expect_args(name: &str, args: &[&str], count: usize) -> Result<(), String> {
    if args.len() != count {
        return Err(format!("'{}' expects {} arguments, got {}", name, count, args.len()));
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("Invalid {} '{}'", what, raw))
}
