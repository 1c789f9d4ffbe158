use crate::conf::error::ConfigError;
use crate::conf::types::{AccessLensConfig, UaEngineKind};
use std::fs;
use std::path::Path;

/// Read, parse and validate an HCL config file.
pub fn load_config(path: &Path) -> Result<AccessLensConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = parse_config(path, &s)?;

    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn parse_config(path: &Path, source: &str) -> Result<AccessLensConfig, ConfigError> {
    hcl::from_str(source).map_err(|e| ConfigError::parse(path, e))
}

/// Semantic checks that serde can't express.
pub fn validate_config(cfg: &AccessLensConfig) -> Result<(), ConfigError> {
    let enrichment = &cfg.enrichment;

    if enrichment.max_user_agent_length == 0 {
        return Err(ConfigError::InvalidMaxUserAgentLength);
    }

    if enrichment.ua_engine == UaEngineKind::UaParser {
        let Some(path) = &enrichment.uaparser_regexes else {
            return Err(ConfigError::MissingRegexes);
        };
        if !path.is_file() {
            return Err(ConfigError::RegexesNotFound { path: path.clone() });
        }
    }

    Ok(())
}
