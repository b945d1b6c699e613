use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};

use crate::schema::v1::{ProfileV1, WellnessReportV1};

pub mod json_writer;
pub mod summary;

pub fn read_profile(path: &Path) -> Result<ProfileV1> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let profile = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse profile {}", path.display()))?;
    Ok(profile)
}

pub fn write_json(path: &Path, report: &WellnessReportV1) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
