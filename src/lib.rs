//! Deterministic wellness sub-scores from blood biomarker panels.
//!
//! Three pure pipelines (metabolic efficiency, inflammation/recovery,
//! oxygen transport) resolve free-form lab readings into canonical units,
//! compare them one-sided against population baselines and fold the
//! deviations into bounded 0-100 scores with a qualitative interpretation.

pub mod cli;
pub mod io;
pub mod math;
pub mod panel;
pub mod schema;
pub mod scores;
