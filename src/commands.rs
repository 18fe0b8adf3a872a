//! Interactive commands read from stdin while the timer runs.
//!
//! An empty line toggles, like the start/stop button of the overlay.

use clap::{Parser, Subcommand};

use crate::app_state::AppState;
use fractal_core::DisplayTriple;

#[derive(Parser)]
#[command(about = "fractal timer commands")]
struct Repl {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start if stopped, stop if running
    Toggle,
    Start,
    Stop,
    /// Show the current timers
    Status,
    Exit,
}

/// What the driver should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Show(DisplayTriple),
    Nothing,
    Quit,
}

pub fn respond(line: &str, state: &mut AppState) -> Result<Outcome, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Outcome::Show(state.toggle()));
    }

    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "fractal-timer".to_string());
    let repl = Repl::try_parse_from(args).map_err(|e| e.to_string())?;

    let outcome = match repl.command {
        Some(Command::Toggle) => Outcome::Show(state.toggle()),
        Some(Command::Start) => match state.start() {
            Some(triple) => Outcome::Show(triple),
            None => {
                println!("already running");
                Outcome::Nothing
            }
        },
        Some(Command::Stop) => match state.stop() {
            Some(triple) => Outcome::Show(triple),
            None => {
                println!("not running");
                Outcome::Nothing
            }
        },
        Some(Command::Status) => {
            let status = if state.is_running() { "running" } else { "stopped" };
            println!("{status}");
            Outcome::Show(state.display())
        }
        Some(Command::Exit) => Outcome::Quit,
        None => Outcome::Nothing,
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractal_core::{ManualClock, SimpleTimer, ZoneRegistry};

    fn state() -> AppState {
        let timer = SimpleTimer::with_clock(ZoneRegistry::fractals(), ManualClock::new(0));
        AppState::new(Box::new(timer))
    }

    #[test]
    fn test_empty_line_toggles() {
        let mut state = state();
        assert!(matches!(respond("", &mut state), Ok(Outcome::Show(_))));
        assert!(state.is_running());
        respond("   ", &mut state).unwrap();
        assert!(!state.is_running());
    }

    #[test]
    fn test_start_stop_commands() {
        let mut state = state();
        assert!(matches!(respond("start", &mut state), Ok(Outcome::Show(_))));
        assert_eq!(respond("start", &mut state), Ok(Outcome::Nothing));
        assert!(matches!(respond("stop", &mut state), Ok(Outcome::Show(_))));
        assert_eq!(respond("stop", &mut state), Ok(Outcome::Nothing));
    }

    #[test]
    fn test_exit() {
        let mut state = state();
        assert_eq!(respond("exit", &mut state), Ok(Outcome::Quit));
    }

    #[test]
    fn test_unknown_command_is_error() {
        let mut state = state();
        assert!(respond("rewind", &mut state).is_err());
        assert!(respond("\"unterminated", &mut state).is_err());
    }
}
