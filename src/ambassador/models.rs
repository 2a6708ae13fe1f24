//! Data models for the Ambassador admin API

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping from microservice name to target URL.
///
/// Ordered so repeated renderings list services in a stable order
/// regardless of the JSON property order the service emits.
pub type PointingMap = BTreeMap<String, String>;

/// Request body for the update endpoint
#[derive(Serialize, Debug, Clone)]
pub struct UpdateRequest {
    /// Microservice name (the remote side calls this "system")
    pub system: String,
    /// Replacement target URL
    pub url: String,
}

/// One in-flight pointing edit; lives only within a single workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    pub service: String,
    pub old_url: String,
    pub new_url: String,
}
