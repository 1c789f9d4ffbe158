//! Shared helpers for the end-to-end tests.

use accesslens_core::conf::AccessLensConfig;
use accesslens_core::enrichment::Enricher;
use accesslens_core::enrichment::user_agent::build_ua_engine;
use accesslens_core::pipeline::{self, PipelineError, RunOptions};
use accesslens_core::summary::RunSummary;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Run the pipeline with the default (woothee) engine.
pub fn run_pipeline(input: &Path, output: &Path) -> Result<RunSummary, PipelineError> {
    let cfg = AccessLensConfig::default();
    let engine = build_ua_engine(&cfg.enrichment).expect("default engine builds");
    let enricher = Enricher::new(engine);

    pipeline::run(
        &RunOptions {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            pretty: cfg.output.pretty,
        },
        &enricher,
    )
}

pub fn read_records(path: &Path) -> Vec<Value> {
    let text = fs::read_to_string(path).expect("output file exists");
    let json: Value = serde_json::from_str(&text).expect("output is valid JSON");
    json.as_array().expect("output is a JSON array").clone()
}
