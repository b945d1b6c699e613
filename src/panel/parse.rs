//! Raw-reading parsers: magnitude extraction, unit tokens, key normalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::panel::PanelValue;

/// Regex for the leading signed decimal in a reading.
static MAGNITUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d*\.?\d+").unwrap());

/// Regex for a unit token: letters, '/', '%' and '^'.
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z/%^]+").unwrap());

/// Pull the numeric magnitude out of a raw panel reading. Text readings
/// yield the first signed-decimal substring ("5.6 mmol/L" -> 5.6,
/// "<0.3" -> 0.3); null readings and text with no digits yield `None`,
/// which callers treat the same as a missing marker.
pub fn parse_magnitude(value: &PanelValue) -> Option<f64> {
    match value {
        PanelValue::Number(n) => Some(*n),
        PanelValue::Text(s) => MAGNITUDE_RE
            .find(s)
            .and_then(|m| m.as_str().parse().ok()),
        PanelValue::Null => None,
    }
}

/// Best-effort unit token: the first run of ASCII letters, '/', '%' or
/// '^' in a text reading. Numeric and null readings carry no unit.
/// Characters outside the class break the run, so "x10^9/L" tokenizes as
/// "x" and a micro sign is skipped ("µmol/L" tokenizes as "mol/L").
pub fn unit_token(value: &PanelValue) -> String {
    match value {
        PanelValue::Text(s) => UNIT_RE
            .find(s)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        PanelValue::Number(_) | PanelValue::Null => String::new(),
    }
}

/// Normalize a panel key for alias comparison: lowercase, with spaces and
/// hyphens mapped to underscores ("Serum Ferritin" -> "serum_ferritin",
/// "hs-CRP" -> "hs_crp").
pub fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace([' ', '-'], "_")
}
