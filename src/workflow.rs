//! Update-and-verify workflow for one pointing edit
//!
//! Sequence: fetch the current map, let the operator pick a service and edit
//! its URL, gate on validation and explicit confirmation, submit, then
//! re-fetch and reconcile. The re-fetched state is the authoritative success
//! signal; the update endpoint's own response is diagnostic text only.

use log::debug;

use crate::ambassador::{AmbassadorClient, PendingUpdate};
use crate::error::Result;
use crate::output::print_pointings;
use crate::ui::{create_spinner, finish_spinner, Prompter};

/// Characters allowed in the path portion of a pointing URL
const PATH_CHARS: &str = "-._~:/?#[]@!$&'()*+,;=%";

/// Terminal result of one workflow invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Operator backed out before the update was sent; no mutation happened
    Aborted,
    /// Update was submitted and reconciled against a fresh list
    Completed(UpdateReport),
}

/// What happened to a submitted update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub update: PendingUpdate,
    /// URL the re-fetched list shows for the service (empty if absent)
    pub after_url: String,
    /// Whether the re-fetched list shows exactly the requested URL
    pub reflected: bool,
    /// Raw update-endpoint response body, kept verbatim for diagnostics
    pub raw_response: String,
}

/// Check a replacement URL against `scheme://host[:port][/path]`.
///
/// Scheme must be http or https; the host may contain alphanumerics, dots,
/// hyphens, underscores and colons. A failing URL is not rejected outright —
/// the workflow warns and lets the operator confirm past it.
pub fn is_valid_url_shape(url: &str) -> bool {
    let rest = if let Some(r) = url.strip_prefix("http://") {
        r
    } else if let Some(r) = url.strip_prefix("https://") {
        r
    } else {
        return false;
    };

    let (host, path) = match rest.split_once('/') {
        Some((host, path)) => (host, Some(path)),
        None => (rest, None),
    };

    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':'))
    {
        return false;
    }

    match path {
        Some(p) => p
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PATH_CHARS.contains(c)),
        None => true,
    }
}

/// Run one select → edit → confirm → submit → verify cycle.
///
/// Returns `Ok(UpdateOutcome::Aborted)` for every operator-declined gate.
/// Only a failed list fetch (before or after) is an error; a failed update
/// POST is folded into the diagnostic report and reconciliation still runs.
pub async fn run_update_workflow(
    client: &AmbassadorClient,
    prompter: &dyn Prompter,
    quiet: bool,
) -> Result<UpdateOutcome> {
    let spinner = create_spinner("Fetching current pointings...", quiet);
    let before = client.list_pointings().await;
    finish_spinner(spinner);
    let before = before?;

    if before.is_empty() {
        println!("(no pointings configured, nothing to update)");
        return Ok(UpdateOutcome::Aborted);
    }
    print_pointings(&before);

    let services: Vec<String> = before.keys().cloned().collect();
    let Some(index) = prompter.select_one("Select a service to update", &services)? else {
        println!("Cancelled");
        return Ok(UpdateOutcome::Aborted);
    };
    let service = services[index].clone();
    let old_url = before[&service].clone();

    let new_url = prompter
        .prompt_text(&format!("New URL for '{}'", service), &old_url)?
        .trim()
        .to_string();

    if !is_valid_url_shape(&new_url) {
        eprintln!(
            "Warning: '{}' does not match scheme://host[:port][/path] with scheme http or https",
            new_url
        );
        if !prompter.confirm("Use it anyway?")? {
            println!("Cancelled");
            return Ok(UpdateOutcome::Aborted);
        }
    }

    println!("Service: {}", service);
    println!("Old URL: {}", old_url);
    println!("New URL: {}", new_url);
    if !prompter.confirm("Apply this change?")? {
        println!("Cancelled");
        return Ok(UpdateOutcome::Aborted);
    }

    let update = PendingUpdate {
        service: service.clone(),
        old_url,
        new_url: new_url.clone(),
    };

    let spinner = create_spinner(&format!("Updating '{}'...", service), quiet);
    // A failed POST is not fatal: the remote system is authoritative and the
    // re-fetch below decides whether the change took effect.
    let raw_response = match client.update_pointing(&service, &new_url).await {
        Ok(body) => body,
        Err(e) => {
            debug!("Update POST failed for '{}': {}", service, e);
            format!("update request failed: {}", e)
        }
    };
    finish_spinner(spinner);

    let spinner = create_spinner("Verifying update...", quiet);
    let after = client.list_pointings().await;
    finish_spinner(spinner);
    let after = after?;

    // An absent key reads as an empty URL and therefore as a mismatch
    let after_url = after.get(&service).cloned().unwrap_or_default();
    let reflected = after_url == new_url;

    let report = UpdateReport {
        update,
        after_url,
        reflected,
        raw_response,
    };
    print_report(&report);
    Ok(UpdateOutcome::Completed(report))
}

fn print_report(report: &UpdateReport) {
    if report.reflected {
        println!("Updated: {}", report.update.service);
    } else {
        println!(
            "Update did not reflect as expected for '{}'",
            report.update.service
        );
    }
    println!("  Before: {}", report.update.old_url);
    println!("  After:  {}", report.after_url);

    println!("Update endpoint response:");
    if report.raw_response.is_empty() {
        println!("<empty response>");
    } else {
        println!("{}", report.raw_response);
    }
}
