//! ambctl - Interactive admin CLI for Ambassador microservice pointings
//!
//! Lists the current microservice-to-URL pointings of an Ambassador
//! instance, edits one pointing through an update-and-verify workflow, and
//! checks the health of the matching Armor host.
//!
//! # Features
//!
//! - List service→URL pointings in a stable order
//! - Update one pointing: edit, validate, confirm, submit, then re-fetch
//!   and reconcile (the re-fetched state is the success signal)
//! - Derive and check the conventional Armor health URL
//! - Switch between demo, QA and custom environments without restarting
//!
//! Fully interactive: run `ambctl` and pick actions from the menu. All
//! defaults can be overridden with `AMBCTL_*` environment variables.

pub mod ambassador;
pub mod armor;
pub mod config;
pub mod environment;
pub mod error;
pub mod output;
pub mod shell;
pub mod ui;
pub mod workflow;

pub use ambassador::{AmbassadorClient, PendingUpdate, PointingMap, UpdateRequest};
pub use config::Settings;
pub use environment::{derive_health_url, EnvLabel, Environment};
pub use error::{AmbError, Result};
pub use shell::{resolve_environment, run_shell};
pub use ui::{auto_prompter, DialoguerPrompter, LinePrompter, Prompter};
pub use workflow::{is_valid_url_shape, run_update_workflow, UpdateOutcome, UpdateReport};
