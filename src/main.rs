use clap::Parser;
use fractal_core::{AppConfig, MumbleLink};

use fractal_timer::driver;
use fractal_timer::logging;
use fractal_timer::{AppState, Args};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    let _log_guard = logging::init();

    let config = args.apply(AppConfig::load());

    // Nothing can be tracked without the game link
    let link = MumbleLink::open(&config.link_name).map_err(|e| e.to_string())?;
    let state = AppState::from_args(&args, &config).map_err(|e| e.to_string())?;

    driver::run(state, link, config.poll_interval()).await;
    Ok(())
}
