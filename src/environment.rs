//! Environment selection and URL derivation
//!
//! An [`Environment`] is the only state the shell carries between menu
//! iterations. It is built once at startup and replaced wholesale when the
//! operator changes environment; nothing mutates it in place.

use std::fmt;

use log::debug;

use crate::config::{armor, Settings};

/// Known environment labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvLabel {
    Demo,
    Qa,
    Custom,
}

impl EnvLabel {
    /// All labels, in menu order
    pub const ALL: [EnvLabel; 3] = [EnvLabel::Demo, EnvLabel::Qa, EnvLabel::Custom];

    /// Default fqdn for this label, from settings
    pub fn default_fqdn<'a>(&self, settings: &'a Settings) -> &'a str {
        match self {
            EnvLabel::Demo => &settings.demo_fqdn,
            EnvLabel::Qa => &settings.qa_fqdn,
            EnvLabel::Custom => "",
        }
    }
}

impl fmt::Display for EnvLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvLabel::Demo => write!(f, "demo"),
            EnvLabel::Qa => write!(f, "qa"),
            EnvLabel::Custom => write!(f, "custom"),
        }
    }
}

/// A resolved target environment: label, raw fqdn, and the derived base URL
#[derive(Debug, Clone)]
pub struct Environment {
    pub label: EnvLabel,
    pub fqdn: String,
    pub base_url: String,
}

impl Environment {
    /// Build an environment from a label and a free-text `host[:port]` input.
    ///
    /// If the input already carries a scheme it is used verbatim; otherwise
    /// the configured scheme is prefixed. Host reachability is not checked
    /// here — unreachable hosts surface as request failures later.
    pub fn new(label: EnvLabel, fqdn: &str, scheme: &str) -> Self {
        let fqdn = fqdn.trim().to_string();
        let base_url = if fqdn.contains("://") {
            fqdn.clone()
        } else {
            format!("{}://{}", scheme, fqdn)
        };
        debug!("Resolved environment {}: base_url={}", label, base_url);
        Self {
            label,
            fqdn,
            base_url,
        }
    }
}

/// Derive a default Armor health-check URL from an Ambassador fqdn.
///
/// Pure string derivation the operator can override before sending:
/// the port is copied from the fqdn (default 8080), the Armor host number
/// is the trailing numeric run of the Ambassador host's first label
/// (a run right after the last hyphen wins, placeholder `X` when there is
/// none), and the host prefix follows the environment label.
pub fn derive_health_url(label: EnvLabel, fqdn: &str, scheme: &str) -> String {
    let (host, port) = split_host_port(fqdn);
    let num = trailing_numeral(host);
    let prefix = match label {
        EnvLabel::Demo => "dev-",
        EnvLabel::Qa => "qa-",
        EnvLabel::Custom => "",
    };
    format!(
        "{}://{}armor{}.{}:{}{}",
        scheme,
        prefix,
        num,
        armor::DOMAIN,
        port,
        armor::HEALTH_PATH
    )
}

/// Split `host[:port]` into host and port, defaulting the port to 8080.
///
/// A leading `scheme://` and any path are stripped first, so a fqdn the
/// operator entered with a scheme derives the same URL as a bare one.
fn split_host_port(fqdn: &str) -> (&str, &str) {
    let fqdn = match fqdn.split_once("://") {
        Some((_, rest)) => rest,
        None => fqdn,
    };
    let fqdn = fqdn.split('/').next().unwrap_or(fqdn);
    match fqdn.split_once(':') {
        Some((host, port)) if !port.is_empty() => (host, port),
        Some((host, _)) => (host, armor::DEFAULT_PORT),
        None => (fqdn, armor::DEFAULT_PORT),
    }
}

/// Extract the trailing numeric run from the host's first label.
///
/// Precedence: an all-digit run after the last hyphen, then any trailing
/// digit run, then the placeholder `X`.
fn trailing_numeral(host: &str) -> String {
    let label = host.split('.').next().unwrap_or(host);

    if let Some((_, tail)) = label.rsplit_once('-') {
        if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) {
            return tail.to_string();
        }
    }

    let digits: String = label
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    if digits.is_empty() {
        "X".to_string()
    } else {
        digits
    }
}
