use serde::Serialize;

/// One access-log line that matched the combined format.
///
/// Every field is populated; anomalies inside a matched line degrade to
/// defaults rather than dropping the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    pub remote_addr: String,
    /// `-` when the client was not authenticated
    pub remote_user: String,
    /// Timestamp exactly as logged, e.g. `10/Oct/2023:13:55:36 -0700`
    pub time_local: String,
    /// RFC 3339 form of `time_local`, `None` when it could not be parsed
    pub timestamp: Option<String>,
    pub request: String,
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub status: u32,
    pub body_bytes_sent: u64,
    pub http_referer: String,
    pub http_user_agent: String,
}

impl AccessRecord {
    /// User-agent header, unless it was logged as empty or `-`.
    pub fn user_agent(&self) -> Option<&str> {
        match self.http_user_agent.as_str() {
            "" | "-" => None,
            ua => Some(ua),
        }
    }
}

/// Method, path and protocol split out of the raw request line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
    pub protocol: String,
}
