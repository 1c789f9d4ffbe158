use crate::enrichment::user_agent::DEFAULT_MAX_USER_AGENT_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of an `accesslens.hcl` file. Every block is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AccessLensConfig {
    #[serde(default)]
    pub enrichment: EnrichmentConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EnrichmentConfig {
    #[serde(default = "default_ua_engine")]
    pub ua_engine: UaEngineKind,

    /// Path to a ua-parser `regexes.yaml`. Required by the uaparser engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uaparser_regexes: Option<PathBuf>,

    /// User-agent strings longer than this are not classified.
    #[serde(default = "default_max_user_agent_length")]
    pub max_user_agent_length: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            ua_engine: default_ua_engine(),
            uaparser_regexes: None,
            max_user_agent_length: default_max_user_agent_length(),
        }
    }
}

fn default_ua_engine() -> UaEngineKind {
    UaEngineKind::Woothee
}

fn default_max_user_agent_length() -> usize {
    DEFAULT_MAX_USER_AGENT_LENGTH
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UaEngineKind {
    #[value(name = "uaparser")]
    UaParser,
    Woothee,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print the JSON array
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}
