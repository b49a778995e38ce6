//! Report publishing.
//!
//! One in-memory report is serialized once and written to every configured
//! sink, so all sinks stay byte-identical after each run.

use std::path::Path;

use crate::error::ReportError;
use crate::model::Report;

/// Serialize `report` and write the same payload to each sink path,
/// creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or any write fails.
pub fn publish(report: &Report, sinks: &[impl AsRef<Path>]) -> Result<(), ReportError> {
    let mut body = serde_json::to_vec_pretty(report)?;
    body.push(b'\n');

    for sink in sinks {
        let sink = sink.as_ref();
        if let Some(parent) = sink.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(sink, &body)?;
        tracing::info!(sink = %sink.display(), count = report.count, "report published");
    }
    Ok(())
}
