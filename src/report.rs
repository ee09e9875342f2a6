use crate::constants::{REPORT_MOVEMENT_HEADER, REPORT_POLICY_HEADER};
use crate::error::{Result, SchedulerError};
use crate::scheduler::PolicyResult;
use chrono::Local;
use csv::{Terminator, WriterBuilder};
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Writes one `Policy,TotalMovement` row per result to a timestamped CSV file.
///
/// Rows keep the order of `results` and end with `\n`. Returns the path of
/// the written file.
pub fn export_to_csv_with_path(results: &[PolicyResult], output_dir: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("disk_schedule_{timestamp}.csv");

    std::fs::create_dir_all(output_dir).map_err(|e| SchedulerError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    let file_path = output_dir.join(filename);

    let file = File::create(&file_path).map_err(|e| SchedulerError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    // "\n" on every platform
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(BufWriter::new(file));

    wtr.write_record([REPORT_POLICY_HEADER, REPORT_MOVEMENT_HEADER])?;
    for result in results {
        let policy = result.policy.to_string();
        let movement = result.total_movement.to_string();
        wtr.write_record([policy.as_str(), movement.as_str()])?;
    }

    wtr.flush()?;
    Ok(file_path)
}
