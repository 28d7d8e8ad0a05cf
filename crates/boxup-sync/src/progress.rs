//! Progress reporting consumed by the run loop
//!
//! The engine emits three kinds of events while a run is in flight: a
//! running processed count after every non-error file, a per-file error
//! line, and a final summary. The trait keeps the engine free of any
//! output concern; the CLI plugs in a console implementation and tests
//! plug in a recorder.

use boxup_core::domain::errors::FileError;
use boxup_core::domain::newtypes::RemotePath;
use boxup_core::domain::tally::RunTally;

/// Sink for run progress events.
pub trait ProgressReporter: Send {
    /// A file finished as uploaded or skipped; `count` is the running
    /// total of such files.
    fn processed(&mut self, count: u64);

    /// A file finished with a recoverable error.
    fn file_error(&mut self, path: &RemotePath, reason: &FileError);

    /// The run ended; `tally` holds the final counts.
    fn summary(&mut self, tally: &RunTally);
}

/// Reporter that discards every event.
#[derive(Debug, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn processed(&mut self, _count: u64) {}

    fn file_error(&mut self, _path: &RemotePath, _reason: &FileError) {}

    fn summary(&mut self, _tally: &RunTally) {}
}

/// Reporter that records events for assertion.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub processed: Vec<u64>,
    pub errors: Vec<(String, String)>,
    pub summaries: Vec<String>,
}

#[cfg(test)]
impl ProgressReporter for RecordingReporter {
    fn processed(&mut self, count: u64) {
        self.processed.push(count);
    }

    fn file_error(&mut self, path: &RemotePath, reason: &FileError) {
        self.errors.push((path.to_string(), reason.to_string()));
    }

    fn summary(&mut self, tally: &RunTally) {
        self.summaries.push(tally.to_string());
    }
}
