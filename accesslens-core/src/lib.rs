pub mod access_log;
pub mod cli;
pub mod conf;
pub mod enrichment;
pub mod logging;
pub mod pipeline;
pub mod summary;

#[cfg(test)]
mod test_support;
