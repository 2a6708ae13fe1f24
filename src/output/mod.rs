//! Output formatting module

mod table;

pub use table::{pointings_table, print_pointings};

/// Pretty-print a body as JSON when it parses, otherwise return it raw.
///
/// Health endpoints usually answer JSON but the tool shows whatever came
/// back rather than failing on shape.
pub fn pretty_json_or_raw(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
