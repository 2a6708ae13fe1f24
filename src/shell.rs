//! Interactive menu loop
//!
//! Dispatches to list, update, health-check and change-environment actions.
//! The current [`Environment`] is the only state that crosses menu
//! iterations; it is threaded through the loop as a plain value. A failed
//! action prints its error and the loop re-prompts.

use log::debug;

use crate::ambassador::AmbassadorClient;
use crate::armor;
use crate::config::Settings;
use crate::environment::{derive_health_url, EnvLabel, Environment};
use crate::error::Result;
use crate::output::{pretty_json_or_raw, print_pointings};
use crate::ui::{create_spinner, finish_spinner, Prompter};
use crate::workflow::run_update_workflow;

const MENU: [&str; 5] = [
    "List pointings",
    "Update a pointing",
    "Armor health check",
    "Change environment",
    "Quit",
];

/// Prompt for an environment: label first, then an editable fqdn.
///
/// Returns `None` when the operator backs out of the selection.
pub fn resolve_environment(
    prompter: &dyn Prompter,
    settings: &Settings,
) -> Result<Option<Environment>> {
    let labels: Vec<String> = EnvLabel::ALL.iter().map(|l| l.to_string()).collect();
    let Some(index) = prompter.select_one("Select environment", &labels)? else {
        return Ok(None);
    };
    let label = EnvLabel::ALL[index];

    let fqdn = prompter.prompt_text("Ambassador host[:port]", label.default_fqdn(settings))?;
    if fqdn.trim().is_empty() {
        println!("No host given");
        return Ok(None);
    }

    Ok(Some(Environment::new(label, &fqdn, &settings.scheme)))
}

/// Run the menu loop until the operator quits
pub async fn run_shell(
    settings: &Settings,
    prompter: &dyn Prompter,
    mut env: Environment,
    quiet: bool,
) -> Result<()> {
    let menu: Vec<String> = MENU.iter().map(|s| s.to_string()).collect();

    loop {
        println!();
        let prompt = format!("ambctl [{}: {}]", env.label, env.fqdn);
        let Some(choice) = prompter.select_one(&prompt, &menu)? else {
            break;
        };
        debug!("Menu choice: {}", MENU[choice]);

        match choice {
            0 => {
                if let Err(e) = list_action(settings, &env, quiet).await {
                    eprintln!("Error: {}", e);
                }
            }
            1 => {
                let client = AmbassadorClient::new(&env, settings);
                if let Err(e) = run_update_workflow(&client, prompter, quiet).await {
                    eprintln!("Error: {}", e);
                }
            }
            2 => {
                if let Err(e) = health_action(settings, &env, prompter, quiet).await {
                    eprintln!("Error: {}", e);
                }
            }
            3 => {
                if let Some(new_env) = resolve_environment(prompter, settings)? {
                    env = new_env;
                }
            }
            _ => break,
        }
    }

    Ok(())
}

async fn list_action(settings: &Settings, env: &Environment, quiet: bool) -> Result<()> {
    let client = AmbassadorClient::new(env, settings);
    let spinner = create_spinner("Fetching pointings...", quiet);
    let map = client.list_pointings().await;
    finish_spinner(spinner);
    print_pointings(&map?);
    Ok(())
}

async fn health_action(
    settings: &Settings,
    env: &Environment,
    prompter: &dyn Prompter,
    quiet: bool,
) -> Result<()> {
    let default = derive_health_url(env.label, &env.fqdn, &settings.scheme);
    let url = prompter.prompt_text("Health check URL", &default)?;
    let url = url.trim();
    if url.is_empty() {
        println!("No URL given");
        return Ok(());
    }

    let spinner = create_spinner("Checking health...", quiet);
    let result = armor::check_health(url, settings).await;
    finish_spinner(spinner);

    match result {
        Ok(body) => println!("{}", pretty_json_or_raw(&body)),
        Err(e) => eprintln!("Health check failed: {}", e),
    }
    Ok(())
}
