//! Bounce Template entry point
//!
//! Initializes logging and hands control to the window host until close.

use std::process::ExitCode;

use bounce_template::AppConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    log::info!("{} starting...", config.title);
    log::debug!("Config: {}", config.to_json());

    match bounce_template::platform::run(config) {
        Ok(()) => {
            log::info!("Shut down cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
