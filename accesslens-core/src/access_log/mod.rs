//! Combined access-log format
//!
//! Each line looks like:
//!
//! ```text
//! 127.0.0.1 - frank [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 612 "-" "curl/8.0"
//! ```
//!
//! A line either matches the whole grammar and becomes an [`AccessRecord`], or it
//! is rejected outright. Nothing inside a matched line can reject it: bad numbers,
//! odd request lines and unparsable timestamps fall back to defaults.

mod parse;
mod types;

pub use parse::{
    TIME_LOCAL_FORMAT, normalize_timestamp, parse_body_bytes, parse_line, parse_status,
    split_request,
};
pub use types::{AccessRecord, RequestLine};
