use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod effects;
mod session;

/// Terminal host for the JOPLdoro work/break timer.
///
/// Runs the one-second countdown, plays a cue and raises a desktop
/// notification at every period boundary, and reads commands line by line
/// from stdin.
#[derive(Parser)]
#[command(name = "jopldoro", version, about = "JOPLdoro work/break timer")]
struct Cli {
    /// Disable sound playback at period boundaries
    #[arg(long)]
    no_sound: bool,

    /// Audio file for the bell cue (played when a break ends)
    #[arg(long, value_name = "PATH")]
    bell_sound: Option<PathBuf>,

    /// Audio file for the start cue (played when work ends)
    #[arg(long, value_name = "PATH")]
    start_sound: Option<PathBuf>,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("jopldoro={}", cli.log_level()))),
        )
        .with_writer(std::io::stderr)
        .init();

    effects::probe_tools(cli.no_sound);
    let effects = effects::Effects::new(cli.no_sound, cli.bell_sound, cli.start_sound);

    if let Err(e) = session::run(effects).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
