//! Interactive timer session.
//!
//! Owns the one-second scheduling loop and the command prompt. The timer
//! never sees a clock: this loop delivers `tick()` once per second while
//! the countdown runs, stops delivering the moment it pauses, and executes
//! whatever intents a period boundary emits.

use std::io::{self, Write};

use jopldoro_core::{Intent, Period, PeriodTimer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::effects::Effects;

const COMMANDS_HINT: &str =
    "commands: start | pause | toggle (p) | skip | pin | status | close | quit (q)";

enum Flow {
    Continue,
    Quit,
}

pub async fn run(effects: Effects) -> Result<(), Box<dyn std::error::Error>> {
    let mut timer = PeriodTimer::new();
    let mut pinned = false;

    println!(
        "JOPLdoro - {} minutes work, {} minutes break",
        Period::Work.duration_secs() / 60,
        Period::Break.duration_secs() / 60
    );
    println!("{COMMANDS_HINT}");
    render(&timer, pinned)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // The cadence only counts while the timer runs: the tick branch below is
    // gated on is_running() and the interval is reset on every restart, so a
    // pause never banks ticks for later.
    let mut ticker = time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick(), if timer.is_running() => {
                let intents = timer.tick();
                if !intents.is_empty() {
                    println!();
                    for intent in &intents {
                        if let Intent::Notify { notice } = intent {
                            println!("{}", notice.body);
                        }
                        effects.execute(intent);
                    }
                    info!("{} period is up next", timer.period().label());
                }
                render(&timer, pinned)?;
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        let was_running = timer.is_running();
                        match handle_command(&line, &mut timer, &mut pinned, &effects)? {
                            Flow::Continue => {}
                            Flow::Quit => break,
                        }
                        if !was_running && timer.is_running() {
                            // Fresh cadence: the first decrement lands a
                            // full second from now.
                            ticker.reset();
                        }
                        render(&timer, pinned)?;
                    }
                    None => {
                        debug!("stdin closed, ending session");
                        break;
                    }
                }
            }
            _ = &mut ctrl_c => {
                println!();
                info!("interrupted, ending session");
                break;
            }
        }
    }

    println!();
    info!("session ended");
    Ok(())
}

fn handle_command(
    line: &str,
    timer: &mut PeriodTimer,
    pinned: &mut bool,
    effects: &Effects,
) -> Result<Flow, Box<dyn std::error::Error>> {
    match line.trim() {
        "" => {}
        "start" => timer.start(),
        "pause" => timer.pause(),
        "toggle" | "p" => timer.toggle_running(),
        "skip" => {
            timer.skip();
            println!("skipped ahead; {} period ready", timer.period().label());
        }
        "pin" => match effects.window().set_always_on_top(!*pinned) {
            Ok(()) => {
                *pinned = !*pinned;
                info!(
                    "window pin {}",
                    if *pinned { "enabled" } else { "disabled" }
                );
            }
            Err(e) => warn!("pin toggle failed, keeping previous state: {e}"),
        },
        "status" => {
            println!();
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
        }
        "close" => {
            if let Err(e) = effects.window().close() {
                warn!("window close failed: {e}");
            }
            return Ok(Flow::Quit);
        }
        "quit" | "q" => return Ok(Flow::Quit),
        other => {
            println!("unknown command {other:?}");
            println!("{COMMANDS_HINT}");
        }
    }
    Ok(Flow::Continue)
}

/// Rewrite the widget face in place: period, remaining time, run state.
fn render(timer: &PeriodTimer, pinned: bool) -> io::Result<()> {
    let mut out = io::stdout();
    let state = if timer.is_running() {
        "running"
    } else {
        "paused"
    };
    let pin = if pinned { " [pinned]" } else { "" };
    write!(
        out,
        "\r{:>5} {} ({state}){pin}            ",
        timer.period().label(),
        timer.format_remaining()
    )?;
    out.flush()
}
