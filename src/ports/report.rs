//! Progress reporting sinks.

use super::Reporter;

/// Writes progress lines to stdout for interactive hosts.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&self, message: &str) {
        println!("{message}");
    }
}

/// Discards all progress lines. For embedding hosts that report elsewhere.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn line(&self, _message: &str) {}
}
