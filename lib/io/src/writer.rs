//! Report writers

use crate::error::Result;
use dedupx_similarity::ReportRow;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Header row of the CSV report
pub const REPORT_HEADER: [&str; 3] = ["ContactID Source", "ContactID Match", "Accuracy"];

/// Output format of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `source,match,accuracy` lines under [`REPORT_HEADER`]
    #[default]
    Csv,
    /// A JSON array of row objects
    Json,
}

/// Writes report rows to an output stream
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn write<W: Write>(&self, rows: &[ReportRow], out: W) -> Result<()> {
        match self.format {
            ReportFormat::Csv => write_csv(rows, out),
            ReportFormat::Json => write_json(rows, out),
        }
    }
}

fn write_csv<W: Write>(rows: &[ReportRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(REPORT_HEADER)?;
    for row in rows {
        writer.write_record([
            row.source.to_string(),
            row.matched.to_string(),
            row.accuracy.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(rows: &[ReportRow], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
