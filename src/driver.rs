//! Polling driver
//!
//! One loop serializes everything that touches the timer: the poll tick,
//! stdin commands and Ctrl-C. Stdin is read on a plain thread and forwarded
//! over a channel so a pending read never delays a tick.

use fractal_core::{DisplayTriple, ZoneSource};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::{self, Receiver};
use tokio::time::MissedTickBehavior;

use crate::app_state::AppState;
use crate::commands::{self, Outcome};

/// Prints the display triple whenever it changes
#[derive(Default)]
pub struct StatusLine {
    last: Option<DisplayTriple>,
}

impl StatusLine {
    /// Returns true if the triple differed from the last one shown
    pub fn show(&mut self, triple: DisplayTriple) -> bool {
        if self.last.as_ref() == Some(&triple) {
            return false;
        }
        if let Err(e) = Self::write_line(&mut std::io::stdout().lock(), &triple) {
            tracing::debug!(error = %e, "Failed to write status line");
        }
        self.last = Some(triple);
        true
    }

    fn write_line(out: &mut impl Write, triple: &DisplayTriple) -> std::io::Result<()> {
        writeln!(out, "{triple}")?;
        out.flush()
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    let spawned = thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });
    if let Err(e) = spawned {
        tracing::warn!(error = %e, "Failed to start stdin reader, commands disabled");
    }
    rx
}

pub async fn run<S: ZoneSource>(mut state: AppState, mut source: S, interval: Duration) {
    let mut status = StatusLine::default();
    let mut lines = spawn_stdin_reader();
    let mut stdin_open = true;

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    println!("Press Enter to start/stop, or type 'exit' to quit.");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(triple) = state.tick(source.current_zone()) {
                    status.show(triple);
                }
            }
            line = lines.recv(), if stdin_open => match line {
                Some(line) => match commands::respond(&line, &mut state) {
                    Ok(Outcome::Show(triple)) => {
                        status.show(triple);
                    }
                    Ok(Outcome::Nothing) => {}
                    Ok(Outcome::Quit) => break,
                    Err(e) => println!("{e}"),
                },
                None => {
                    tracing::debug!("stdin closed, commands disabled");
                    stdin_open = false;
                }
            },
            _ = &mut shutdown => break,
        }
    }

    tracing::info!(running = state.is_running(), "exit");
}
