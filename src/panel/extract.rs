//! Alias-based marker lookup over a raw panel.

use tracing::{debug, warn};

use crate::panel::parse::{normalize_key, parse_magnitude, unit_token};
use crate::panel::{BiomarkerPanel, PanelValue};

/// A marker located in a panel: the parsed magnitude plus the unit token
/// left over in the raw reading (empty for bare numbers or unit-less
/// strings).
#[derive(Debug, Clone)]
pub struct RawMarker {
    pub value: f64,
    pub unit: String,
}

/// Scan `panel` for `aliases`, in alias order, and return the first match
/// that parses. A key matches an alias when its normalized form is equal
/// to it. A matching key whose reading has no magnitude does not end the
/// scan; later keys and later aliases still get a chance. Null readings
/// are ordinary absences and skip silently; text with no magnitude gets
/// a warning.
pub fn find_marker(panel: &BiomarkerPanel, aliases: &[&str]) -> Option<RawMarker> {
    for &alias in aliases {
        for (raw_key, raw_value) in panel {
            if normalize_key(raw_key) != alias {
                continue;
            }
            if let Some(value) = parse_magnitude(raw_value) {
                let unit = unit_token(raw_value);
                debug!(alias, value, unit = %unit, "marker resolved");
                return Some(RawMarker { value, unit });
            }
            if matches!(raw_value, PanelValue::Text(_)) {
                warn!(alias, key = %raw_key, "reading has no magnitude, skipped");
            }
        }
    }
    None
}
