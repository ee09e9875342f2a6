use crate::error::{Result, SchedulerError};
use crate::scheduler::Cylinder;

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Reads cylinder requests from a text file, one integer per line.
///
/// # Errors
/// Returns `RequestFileNotFound` if the file does not exist, and
/// `InvalidRequest` / `InvalidRequestRow` for lines that are not a single integer
pub fn read_requests<P: AsRef<Path>>(path: P) -> Result<Vec<Cylinder>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SchedulerError::RequestFileNotFound {
            path: path.to_path_buf(),
        },
        _ => SchedulerError::Io(e),
    })?;
    read_requests_from_reader(file)
}

/// Parses requests from any reader.
/// - Surrounding whitespace on each line is ignored
/// - Blank lines are skipped
/// - Input order is kept, it matters for FCFS
pub fn read_requests_from_reader<R: Read>(reader: R) -> Result<Vec<Cylinder>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true) // row width is checked per record
        .from_reader(reader);

    let mut requests = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let line = rec.position().map_or(i + 1, |p| p.line() as usize);

        if let Some(cylinder) = parse_record(&rec, line)? {
            requests.push(cylinder);
        }
    }

    Ok(requests)
}

fn parse_record(rec: &StringRecord, line: usize) -> Result<Option<Cylinder>> {
    if rec.iter().all(|f| f.trim().is_empty()) {
        return Ok(None);
    }
    if rec.len() != 1 {
        return Err(SchedulerError::InvalidRequestRow {
            line,
            got: rec.len(),
        });
    }

    let value = rec[0].trim();
    value
        .parse()
        .map(Some)
        .map_err(|source| SchedulerError::InvalidRequest {
            line,
            value: value.to_string(),
            source,
        })
}
