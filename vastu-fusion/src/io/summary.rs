//! Registration summaries for humans and machines.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::error::Result;
use crate::registration::Registration;

/// Output format for [`Summary::write`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one fact per line
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// One scanner's position in the universe frame
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerPosition {
    /// Scanner name
    pub name: String,
    /// Position relative to the first scanner
    pub position: Point3,
}

/// Outcome of a registration run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Unique beacons
    pub beacons: usize,
    /// Largest Manhattan distance between two scanners
    pub max_distance: i64,
    /// Scanners in merge order
    pub scanners: Vec<ScannerPosition>,
    /// Passes the driver needed
    pub passes: usize,
    /// Readings below the overlap threshold
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub undersized: Vec<String>,
}

impl Summary {
    /// Summarize a finished registration
    pub fn from_registration(registration: &Registration) -> Self {
        Self {
            beacons: registration.beacon_count(),
            max_distance: registration.max_probe_distance(),
            scanners: registration
                .scanner_positions()
                .into_iter()
                .map(|(name, position)| ScannerPosition { name, position })
                .collect(),
            passes: registration.passes,
            undersized: registration.undersized.clone(),
        }
    }

    /// Write the summary in `format`.
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "beacons: {}", self.beacons)?;
        writeln!(out, "max_distance: {}", self.max_distance)?;
        writeln!(out, "passes: {}", self.passes)?;
        writeln!(out, "scanners:")?;
        for scanner in &self.scanners {
            writeln!(out, "  {} at {}", scanner.name, scanner.position)?;
        }
        if !self.undersized.is_empty() {
            writeln!(out, "undersized: {}", self.undersized.join(", "))?;
        }
        Ok(())
    }
}
