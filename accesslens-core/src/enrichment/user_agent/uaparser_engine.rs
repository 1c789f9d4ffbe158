use crate::enrichment::user_agent::{ClassifyError, UserAgentInfo, is_android_tablet, known};
use anyhow::Context;
use std::fs;
use std::path::Path;
use uaparser::{Parser, UserAgentParser};

const OTHER: &str = "Other";

const DESKTOP_OS_FAMILIES: &[&str] = &[
    "Windows",
    "Mac OS X",
    "Linux",
    "Ubuntu",
    "Fedora",
    "Debian",
    "Chrome OS",
    "FreeBSD",
    "OpenBSD",
    "NetBSD",
];

pub struct UaParserEngine {
    parser: UserAgentParser,
}

impl UaParserEngine {
    pub fn new(regexes_yaml: &[u8]) -> anyhow::Result<Self> {
        let parser = UserAgentParser::from_bytes(regexes_yaml)?;
        Ok(Self { parser })
    }

    /// Load the ua-parser `regexes.yaml` definitions from disk.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read uaparser regexes {}", path.display()))?;
        Self::new(&bytes)
            .with_context(|| format!("failed to load uaparser regexes {}", path.display()))
    }

    pub fn parse(&self, ua: &str) -> Result<UserAgentInfo, ClassifyError> {
        let client = self.parser.parse(ua);

        let browser = known(&client.user_agent.family, OTHER);
        let os = known(&client.os.family, OTHER);
        let device = known(&client.device.family, OTHER);

        if browser.is_none() && os.is_none() && device.is_none() {
            return Err(ClassifyError::Unrecognized);
        }

        let ua_family = client.user_agent.family.to_lowercase();
        let device_family = client.device.family.to_lowercase();
        let os_family = os.as_deref().unwrap_or_default();

        let is_bot = device_family == "spider"
            || ua_family.contains("bot")
            || ua_family.contains("crawler")
            || ua_family.contains("spider");

        let is_tablet = device_family.contains("tablet")
            || device_family.contains("ipad")
            || (os_family == "Android" && is_android_tablet(ua));

        let is_mobile = !is_tablet
            && (device_family.contains("mobile")
                || ua.contains("Mobile")
                || matches!(os_family, "iOS" | "Android"));

        let is_pc = !is_mobile
            && !is_tablet
            && !is_bot
            && DESKTOP_OS_FAMILIES.iter().any(|f| os_family.starts_with(f));

        Ok(UserAgentInfo {
            browser,
            browser_version: dotted([
                client.user_agent.major.as_deref(),
                client.user_agent.minor.as_deref(),
                client.user_agent.patch.as_deref(),
            ]),
            os,
            os_version: dotted([
                client.os.major.as_deref(),
                client.os.minor.as_deref(),
                client.os.patch.as_deref(),
            ]),
            device,
            is_mobile,
            is_tablet,
            is_pc,
            is_bot,
        })
    }
}

/// `[Some("120"), Some("0"), None]` -> `Some("120.0")`
fn dotted<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let parts: Vec<&str> = parts
        .into_iter()
        .map_while(|p| p.filter(|s| !s.is_empty()))
        .collect();

    (!parts.is_empty()).then(|| parts.join("."))
}

#[cfg(test)]
mod tests {
    use super::dotted;

    #[test]
    fn dotted_stops_at_first_missing_part() {
        assert_eq!(
            dotted([Some("120"), Some("0"), None]).as_deref(),
            Some("120.0")
        );
        assert_eq!(dotted([None, Some("1")]), None);
        assert_eq!(dotted([Some("10"), Some(""), Some("3")]).as_deref(), Some("10"));
    }
}
