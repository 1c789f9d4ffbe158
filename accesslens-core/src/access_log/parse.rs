use crate::access_log::types::{AccessRecord, RequestLine};
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Format of `time_local` in the combined log format.
pub const TIME_LOCAL_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

static COMBINED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<remote_addr>\S+) - (?P<remote_user>\S+) ",
        r"\[(?P<time_local>[^\]]+)\] ",
        r#""(?P<request>[^"]*)" "#,
        r"(?P<status>\d+) (?P<body_bytes_sent>\S+) ",
        r#""(?P<http_referer>[^"]*)" "(?P<http_user_agent>[^"]*)"$"#,
    ))
    .expect("combined log pattern must compile")
});

/// Parse a single combined-format access-log line.
///
/// Returns `None` when the (trimmed) line does not match the grammar. Blank
/// lines never match.
pub fn parse_line(line: &str) -> Option<AccessRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let caps = COMBINED.captures(line)?;

    let time_local = capture(&caps, "time_local");
    let request = capture(&caps, "request");
    let RequestLine {
        method,
        path,
        protocol,
    } = split_request(&request);

    Some(AccessRecord {
        remote_addr: capture(&caps, "remote_addr"),
        remote_user: capture(&caps, "remote_user"),
        timestamp: normalize_timestamp(&time_local),
        time_local,
        method,
        path,
        protocol,
        request,
        status: parse_status(caps.name("status").map_or("", |m| m.as_str())),
        body_bytes_sent: parse_body_bytes(caps.name("body_bytes_sent").map_or("", |m| m.as_str())),
        http_referer: capture(&caps, "http_referer"),
        http_user_agent: capture(&caps, "http_user_agent"),
    })
}

fn capture(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Split a request line on single spaces. Anything other than exactly three
/// tokens yields empty fields.
pub fn split_request(request: &str) -> RequestLine {
    let parts: Vec<&str> = request.split(' ').collect();
    match parts.as_slice() {
        [method, path, protocol] => RequestLine {
            method: method.to_string(),
            path: path.to_string(),
            protocol: protocol.to_string(),
        },
        _ => RequestLine::default(),
    }
}

pub fn parse_status(raw: &str) -> u32 {
    raw.parse().unwrap_or(0)
}

pub fn parse_body_bytes(raw: &str) -> u64 {
    if raw == "-" {
        return 0;
    }
    raw.parse().unwrap_or(0)
}

/// `10/Oct/2023:13:55:36 -0700` -> `2023-10-10T13:55:36-07:00`
pub fn normalize_timestamp(time_local: &str) -> Option<String> {
    DateTime::parse_from_str(time_local, TIME_LOCAL_FORMAT)
        .ok()
        .map(|ts| ts.to_rfc3339())
}
