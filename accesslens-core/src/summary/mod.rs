//! End-of-run statistics: how many lines were read, kept and skipped, plus a
//! breakdown of the kept records by status class and client type.

mod aggregation;
mod render;

pub use aggregation::{RunSummary, StatusCounts};
pub use render::render_summary;
