//! Run tally - counters of uploaded/skipped/errored files
//!
//! Process-scoped mutable state: initialized to zero at run start, mutated
//! exactly once per processed entry, read for the final summary line, then
//! discarded. Nothing survives across runs.

use std::fmt::{self, Display, Formatter};

/// Running counters for one mirror run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTally {
    /// Files created or updated remotely.
    pub uploaded: u64,
    /// Files left untouched because their fingerprints matched.
    pub skipped: u64,
    /// Files that hit a recoverable per-file error.
    pub errored: u64,
}

impl RunTally {
    /// A fresh all-zero tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one uploaded (created or updated) file.
    pub fn record_upload(&mut self) {
        self.uploaded += 1;
    }

    /// Record one skipped file.
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Record one errored file.
    pub fn record_error(&mut self) {
        self.errored += 1;
    }

    /// Files counted by the running progress line.
    ///
    /// Deliberately excludes errored files: errors surface only in their
    /// own `err:` line and in the final summary.
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.uploaded + self.skipped
    }
}

impl Display for RunTally {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files uploaded, {} files skipped, {} files errored",
            self.uploaded, self.skipped, self.errored
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let tally = RunTally::new();
        assert_eq!(tally.uploaded, 0);
        assert_eq!(tally.skipped, 0);
        assert_eq!(tally.errored, 0);
        assert_eq!(tally.processed(), 0);
    }

    #[test]
    fn test_each_record_increments_one_counter() {
        let mut tally = RunTally::new();
        tally.record_upload();
        tally.record_skip();
        tally.record_skip();
        tally.record_error();
        assert_eq!(tally.uploaded, 1);
        assert_eq!(tally.skipped, 2);
        assert_eq!(tally.errored, 1);
    }

    #[test]
    fn test_processed_excludes_errors() {
        let mut tally = RunTally::new();
        tally.record_upload();
        tally.record_error();
        assert_eq!(tally.processed(), 1);
    }

    #[test]
    fn test_summary_line_format() {
        let mut tally = RunTally::new();
        tally.record_upload();
        tally.record_upload();
        tally.record_skip();
        assert_eq!(
            tally.to_string(),
            "2 files uploaded, 1 files skipped, 0 files errored"
        );
    }
}
