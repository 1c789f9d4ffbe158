mod uaparser_engine;
mod woothee_engine;

use crate::conf::types::{EnrichmentConfig, UaEngineKind};
use anyhow::Context;
use thiserror::Error;

pub use uaparser_engine::UaParserEngine;
pub use woothee_engine::WootheeEngine;

pub const DEFAULT_MAX_USER_AGENT_LENGTH: usize = 2048;

pub fn build_ua_engine(cfg: &EnrichmentConfig) -> anyhow::Result<UaEngine> {
    match cfg.ua_engine {
        UaEngineKind::UaParser => {
            let path = cfg
                .uaparser_regexes
                .as_deref()
                .context("the uaparser engine needs `uaparser_regexes` to be set")?;
            Ok(UaEngine::UaParser(UaParserEngine::from_path(path)?))
        }
        UaEngineKind::Woothee => Ok(UaEngine::Woothee(WootheeEngine::new())),
    }
}

/// Anything that can turn a raw user-agent string into [`UserAgentInfo`].
pub trait UaClassifier {
    fn classify(&self, ua: &str) -> Result<UserAgentInfo, ClassifyError>;
}

pub enum UaEngine {
    UaParser(UaParserEngine),
    Woothee(WootheeEngine),
}

impl UaClassifier for UaEngine {
    fn classify(&self, ua: &str) -> Result<UserAgentInfo, ClassifyError> {
        match self {
            UaEngine::UaParser(p) => p.parse(ua),
            UaEngine::Woothee(p) => p.parse(ua),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("user-agent was not recognized")]
    Unrecognized,

    #[error("user-agent is {len} bytes, longer than the {max} byte limit")]
    TooLong { len: usize, max: usize },
}

/// Structured view of a user-agent string.
///
/// The flags are independent: a crawler that announces itself as a phone is
/// both `is_mobile` and `is_bot`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentInfo {
    pub browser: Option<String>,
    pub browser_version: Option<String>,
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub device: Option<String>,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_pc: bool,
    pub is_bot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
    Bot,
    Unknown,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Bot => "bot",
            DeviceType::Unknown => "unknown",
        }
    }

    /// Collapse the classification flags into one bucket. Bots win over
    /// everything else.
    pub fn from_flags(is_mobile: bool, is_tablet: bool, is_pc: bool, is_bot: bool) -> Self {
        if is_bot {
            DeviceType::Bot
        } else if is_tablet {
            DeviceType::Tablet
        } else if is_mobile {
            DeviceType::Mobile
        } else if is_pc {
            DeviceType::Desktop
        } else {
            DeviceType::Unknown
        }
    }
}

/// `None` for empty strings and the placeholder an engine uses for "no idea".
fn known(value: &str, placeholder: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty() && value != placeholder).then(|| value.to_string())
}

/// Android tablets are the ones that leave the `Mobile` token out.
fn is_android_tablet(ua: &str) -> bool {
    ua.contains("Android") && !ua.contains("Mobile")
}
