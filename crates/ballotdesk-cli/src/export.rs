//! Date-stamped JSON files: table exports and the results report.
//!
//! The browser console downloaded these; here they land in the working
//! directory under the same filename patterns.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use ballotdesk_core::{report, snapshot::Snapshot};
use chrono::Local;

/// Today's date in ISO form, used for filenames and vote dates.
pub fn today() -> String {
  Local::now().format("%Y-%m-%d").to_string()
}

pub fn export_filename(table: &str, date: &str) -> String {
  format!("{table}_export_{date}.json")
}

pub fn report_filename(date: &str) -> String {
  format!("election_results_report_{date}.json")
}

/// Pretty-print a raw export payload to disk. Returns the path.
pub fn write_export(table: &str, data: &serde_json::Value) -> Result<PathBuf> {
  let path = PathBuf::from(export_filename(table, &today()));
  let body = serde_json::to_string_pretty(data).context("serializing export")?;
  fs::write(&path, body)
    .with_context(|| format!("writing {}", path.display()))?;
  Ok(path)
}

/// Generate the client-side results report and write it to disk.
pub fn write_results_report(snapshot: &Snapshot) -> Result<PathBuf> {
  let document =
    report::results_report(snapshot).context("building results report")?;
  let body =
    report::to_json_string(&document).context("serializing results report")?;
  let path = PathBuf::from(report_filename(&today()));
  fs::write(&path, body)
    .with_context(|| format!("writing {}", path.display()))?;
  Ok(path)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn filenames_follow_the_download_patterns() {
    assert_eq!(
      export_filename("parties", "2026-08-07"),
      "parties_export_2026-08-07.json"
    );
    assert_eq!(
      report_filename("2026-08-07"),
      "election_results_report_2026-08-07.json"
    );
  }
}
