//! UI utilities for terminal interaction
//!
//! This module provides the input capability trait, its interchangeable
//! implementations, and progress spinners.

mod prompt;
mod spinner;

pub use prompt::{auto_prompter, DialoguerPrompter, LinePrompter, Prompter};
pub use spinner::{create_spinner, finish_spinner};
