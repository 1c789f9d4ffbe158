use crate::access_log::{AccessRecord, parse_line};
use crate::pipeline::error::PipelineError;
use std::io::BufRead;

/// Everything read from the input, in line order.
#[derive(Debug, Default)]
pub struct Ingested {
    pub records: Vec<AccessRecord>,
    pub lines: u64,
    pub skipped: u64,
}

/// Parse every line of `reader`. Lines that don't match are counted and
/// dropped; only a failing read aborts.
pub fn ingest<R: BufRead>(reader: R) -> Result<Ingested, PipelineError> {
    let mut ingested = Ingested::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| PipelineError::ReadInput {
            line: line_no,
            source,
        })?;
        ingested.lines += 1;

        match parse_line(&line) {
            Some(record) => ingested.records.push(record),
            None => {
                ingested.skipped += 1;
                // Blank lines still count toward `skipped`, but there is no content to point a
                // warning at.
                if !line.trim().is_empty() {
                    tracing::warn!(
                        line = line_no,
                        "line does not match combined log format; skipping"
                    );
                }
            }
        }
    }

    Ok(ingested)
}
