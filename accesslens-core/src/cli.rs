use crate::conf::types::UaEngineKind;
use crate::conf::{AccessLensConfig, ConfigError, config_error_hint, load_config, validate_config};
use crate::enrichment::Enricher;
use crate::enrichment::user_agent::build_ua_engine;
use crate::logging::LogFormat;
use crate::pipeline::{self, RunOptions};
use crate::summary::RunSummary;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Access log to read (combined format)
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// JSON file to write
    #[arg(long = "out", value_name = "PATH")]
    pub output: PathBuf,

    /// Path to an accesslens.hcl config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// User-agent engine, overrides the config file
    #[arg(long, value_enum)]
    pub ua_engine: Option<UaEngineKind>,

    /// Write the JSON array on a single line
    #[arg(long, default_value = "false")]
    pub compact: bool,

    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Resolve the effective config: file (if any), then command-line overrides.
pub fn resolve_config(args: &RunArgs) -> Result<AccessLensConfig, ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => AccessLensConfig::default(),
    };

    if let Some(engine) = args.ua_engine {
        cfg.enrichment.ua_engine = engine;
    }
    if args.compact {
        cfg.output.pretty = false;
    }

    // Overrides can invalidate a config that was fine on its own.
    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn run(args: RunArgs) -> anyhow::Result<RunSummary> {
    println!("Reading from {}", args.input.display());
    println!("Will write to {}", args.output.display());

    let cfg = resolve_config(&args).map_err(|err| match config_error_hint(&err) {
        Some(hint) => anyhow::anyhow!("invalid configuration: {err}\n\n{hint}"),
        None => anyhow::Error::new(err).context("invalid configuration"),
    })?;

    let engine = build_ua_engine(&cfg.enrichment)?;
    let enricher =
        Enricher::new(engine).with_max_user_agent_length(cfg.enrichment.max_user_agent_length);

    let opts = RunOptions {
        input: args.input,
        output: args.output,
        pretty: cfg.output.pretty,
    };

    pipeline::run(&opts, &enricher)
        .with_context(|| format!("failed to process {}", opts.input.display()))
}
