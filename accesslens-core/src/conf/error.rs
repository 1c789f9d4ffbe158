use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse HCL in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("ua_engine \"uaparser\" requires uaparser_regexes to be set")]
    MissingRegexes,

    #[error("uaparser_regexes file {path} does not exist")]
    RegexesNotFound { path: PathBuf },

    #[error("max_user_agent_length must be greater than zero")]
    InvalidMaxUserAgentLength,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Extra guidance printed under a config error, if there is any worth giving.
pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::MissingRegexes | ConfigError::RegexesNotFound { .. } => Some(
            "The uaparser engine loads its rules from the ua-parser project's regexes.yaml.\n\
             \n\
             Example:\n\
             \n\
             enrichment {\n\
             \x20 ua_engine        = \"uaparser\"\n\
             \x20 uaparser_regexes = \"/etc/accesslens/regexes.yaml\"\n\
             }\n\
             \n\
             Or switch to the built-in engine with ua_engine = \"woothee\".",
        ),

        ConfigError::InvalidMaxUserAgentLength => Some(
            "Set max_user_agent_length to a positive byte count, e.g. 2048.",
        ),

        _ => None,
    }
}
