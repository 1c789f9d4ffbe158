use crate::enrichment::user_agent::{ClassifyError, UserAgentInfo, is_android_tablet, known};
use woothee::parser::Parser;

const UNKNOWN: &str = "UNKNOWN";

pub struct WootheeEngine {
    parser: Parser,
}

impl WootheeEngine {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn parse(&self, ua: &str) -> Result<UserAgentInfo, ClassifyError> {
        let Some(result) = self.parser.parse(ua) else {
            return Err(ClassifyError::Unrecognized);
        };

        let browser = known(result.name, UNKNOWN);
        let os = known(result.os, UNKNOWN);
        let device = known(result.category, UNKNOWN);

        if browser.is_none() && os.is_none() && device.is_none() {
            return Err(ClassifyError::Unrecognized);
        }

        let is_bot = result.category == "crawler";
        let is_pc = result.category == "pc";
        let is_tablet = result.category == "smartphone"
            && (result.os == "iPad" || (result.os == "Android" && is_android_tablet(ua)));
        let is_mobile =
            matches!(result.category, "smartphone" | "mobilephone") && !is_tablet;

        Ok(UserAgentInfo {
            browser,
            browser_version: known(result.version, UNKNOWN),
            os,
            os_version: known(&result.os_version, UNKNOWN),
            device,
            is_mobile,
            is_tablet,
            is_pc,
            is_bot,
        })
    }
}
