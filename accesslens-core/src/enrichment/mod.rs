//! User-agent enrichment of parsed access-log records.
//!
//! [`Enricher::enrich`] never fails. A missing user-agent and one the
//! classifier can't handle both end up with the same default [`UaFields`]; only
//! the second is worth a warning.

pub mod user_agent;


use crate::access_log::AccessRecord;
use crate::enrichment::user_agent::{
    ClassifyError, DEFAULT_MAX_USER_AGENT_LENGTH, DeviceType, UaClassifier, UaEngine,
    UserAgentInfo,
};
use serde::Serialize;

/// The `ua_*` block attached to every output record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UaFields {
    pub ua_browser: Option<String>,
    pub ua_browser_version: Option<String>,
    pub ua_os: Option<String>,
    pub ua_os_version: Option<String>,
    pub ua_device: Option<String>,
    pub ua_is_mobile: bool,
    pub ua_is_tablet: bool,
    pub ua_is_pc: bool,
    pub ua_is_bot: bool,
}

impl From<UserAgentInfo> for UaFields {
    fn from(info: UserAgentInfo) -> Self {
        Self {
            ua_browser: info.browser,
            ua_browser_version: info.browser_version,
            ua_os: info.os,
            ua_os_version: info.os_version,
            ua_device: info.device,
            ua_is_mobile: info.is_mobile,
            ua_is_tablet: info.is_tablet,
            ua_is_pc: info.is_pc,
            ua_is_bot: info.is_bot,
        }
    }
}

impl UaFields {
    /// True when nothing is known about the client.
    pub fn is_default(&self) -> bool {
        *self == UaFields::default()
    }

    pub fn device_type(&self) -> DeviceType {
        DeviceType::from_flags(
            self.ua_is_mobile,
            self.ua_is_tablet,
            self.ua_is_pc,
            self.ua_is_bot,
        )
    }
}

/// A parsed record plus its user-agent classification, serialized as one flat
/// JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub access: AccessRecord,

    #[serde(flatten)]
    pub ua: UaFields,
}

pub struct Enricher<C = UaEngine> {
    classifier: C,
    max_user_agent_length: usize,
}

impl<C: UaClassifier> Enricher<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            max_user_agent_length: DEFAULT_MAX_USER_AGENT_LENGTH,
        }
    }

    pub fn with_max_user_agent_length(mut self, max: usize) -> Self {
        self.max_user_agent_length = max;
        self
    }

    pub fn enrich(&self, access: AccessRecord) -> EnrichedRecord {
        let ua = match access.user_agent() {
            Some(ua) => self.classify(ua),
            None => UaFields::default(),
        };

        EnrichedRecord { access, ua }
    }

    fn classify(&self, ua: &str) -> UaFields {
        let result = if ua.len() > self.max_user_agent_length {
            Err(ClassifyError::TooLong {
                len: ua.len(),
                max: self.max_user_agent_length,
            })
        } else {
            self.classifier.classify(ua)
        };

        match result {
            Ok(info) => info.into(),
            Err(error) => {
                // Too-long agents aren't echoed back into the logs.
                let shown = if matches!(error, ClassifyError::TooLong { .. }) {
                    ""
                } else {
                    ua
                };
                tracing::warn!(
                    user_agent = shown,
                    %error,
                    "user-agent classification failed; using defaults"
                );
                UaFields::default()
            }
        }
    }
}
