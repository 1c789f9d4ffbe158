//! Batch pipeline: read every line, parse, enrich, then write the whole set.
//!
//! input file
//! ingest (parse_line per line)
//! Vec<AccessRecord>
//! enrich_all
//! Vec<EnrichedRecord>
//! write_output
//! RunSummary

mod error;
mod ingest;
mod output;

pub use error::PipelineError;
pub use ingest::{Ingested, ingest};
pub use output::write_output;

use crate::access_log::AccessRecord;
use crate::enrichment::user_agent::UaClassifier;
use crate::enrichment::{EnrichedRecord, Enricher};
use crate::summary::RunSummary;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pretty: bool,
}

/// Enrich records in their original order.
pub fn enrich_all<C: UaClassifier>(
    records: Vec<AccessRecord>,
    enricher: &Enricher<C>,
) -> Vec<EnrichedRecord> {
    records.into_iter().map(|r| enricher.enrich(r)).collect()
}

pub fn run<C: UaClassifier>(
    opts: &RunOptions,
    enricher: &Enricher<C>,
) -> Result<RunSummary, PipelineError> {
    let file = File::open(&opts.input).map_err(|e| PipelineError::open_input(&opts.input, e))?;

    let Ingested {
        records,
        lines,
        skipped,
    } = ingest(BufReader::new(file))?;
    tracing::info!(lines, records = records.len(), skipped, "input consumed");

    let records = enrich_all(records, enricher);
    tracing::debug!(records = records.len(), "records enriched");

    write_output(&opts.output, &records, opts.pretty)?;
    tracing::info!(path = %opts.output.display(), records = records.len(), "output written");

    Ok(RunSummary::collect(lines, skipped, &records))
}
