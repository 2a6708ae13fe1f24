//! Ambassador admin API client module
//!
//! Wraps the two admin endpoints: the pointing list and the pointing update.

mod client;
mod models;

pub use client::AmbassadorClient;
pub use models::{PendingUpdate, PointingMap, UpdateRequest};
