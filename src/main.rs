//! ambctl - Main entry point

use std::io::IsTerminal;

use log::{debug, info};

use ambctl::{auto_prompter, config, resolve_environment, run_shell, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or(config::env::LOG, config::defaults::LOG_LEVEL),
    )
    .init();

    info!("Starting ambctl v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::from_env();
    let prompter = auto_prompter();
    let quiet = !std::io::stdout().is_terminal();

    let Some(env) = resolve_environment(prompter.as_ref(), &settings)? else {
        debug!("No environment selected, exiting");
        return Ok(());
    };

    run_shell(&settings, prompter.as_ref(), env, quiet).await?;

    info!("Exiting");
    Ok(())
}
