use crate::enrichment::EnrichedRecord;
use crate::enrichment::user_agent::DeviceType;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub informational: u64,
    pub success: u64,
    pub redirect: u64,
    pub client_error: u64,
    pub server_error: u64,
    /// Anything outside 100..=599, including the 0 used for unparsable codes
    pub other: u64,
}

impl StatusCounts {
    fn record(&mut self, status: u32) {
        match status {
            100..=199 => self.informational += 1,
            200..=299 => self.success += 1,
            300..=399 => self.redirect += 1,
            400..=499 => self.client_error += 1,
            500..=599 => self.server_error += 1,
            _ => self.other += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the input, blank ones included
    pub lines: u64,
    /// Records written to the output
    pub processed: u64,
    /// Lines that did not match the combined format
    pub skipped: u64,

    pub status: StatusCounts,

    // Identity semantics: unknown means no usable user-agent.
    pub bot_count: u64,
    pub human_count: u64,
    pub unknown_identity_count: u64,

    pub device_counts: BTreeMap<DeviceType, u64>,
}

impl RunSummary {
    pub fn collect(lines: u64, skipped: u64, records: &[EnrichedRecord]) -> Self {
        let mut summary = RunSummary {
            lines,
            skipped,
            processed: records.len() as u64,
            ..RunSummary::default()
        };

        for record in records {
            summary.status.record(record.access.status);

            if record.ua.is_default() {
                summary.unknown_identity_count += 1;
            } else if record.ua.ua_is_bot {
                summary.bot_count += 1;
            } else {
                summary.human_count += 1;
            }

            *summary
                .device_counts
                .entry(record.ua.device_type())
                .or_insert(0) += 1;
        }

        summary
    }
}
