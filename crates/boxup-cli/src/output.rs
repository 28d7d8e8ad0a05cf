//! Console progress reporting
//!
//! Implements the engine's [`ProgressReporter`] against stdout. All three
//! line kinds share the stream so they interleave in processing order.
//! Line formats are part of the CLI surface:
//!
//! ```text
//! 3 files processed
//! err: /backup/clash name collision with directory
//! 4 files uploaded, 1 files skipped, 1 files errored
//! ```

use boxup_core::domain::errors::FileError;
use boxup_core::domain::newtypes::RemotePath;
use boxup_core::domain::tally::RunTally;
use boxup_sync::progress::ProgressReporter;

/// Reporter that prints every progress line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn processed(&mut self, count: u64) {
        println!("{count} files processed");
    }

    fn file_error(&mut self, path: &RemotePath, reason: &FileError) {
        println!("err: {path} {reason}");
    }

    fn summary(&mut self, tally: &RunTally) {
        println!("{tally}");
    }
}
