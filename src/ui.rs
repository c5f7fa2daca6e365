// UI layer: walks the batch, submits each employee and prints one report
// line per record. Report lines go to the given writer (stdout in the
// binary); the spinner shown while a request is in flight lives on stderr.

use crate::api::{ApiClient, SubmissionError};
use crate::batch::Employee;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Per-outcome counts for one run. Informational only: the process exit
/// code does not depend on it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed + self.errored
    }
}

/// Submit every employee in order, exactly once each, reporting as we go.
/// Individual failures never stop the loop; only a failing writer does.
pub fn run<W: Write>(api: &ApiClient, employees: &[Employee], out: &mut W) -> io::Result<RunSummary> {
    writeln!(out, "Starting bulk upload of {} employees...", employees.len())?;
    writeln!(out)?;

    let mut summary = RunSummary::default();
    for (idx, employee) in employees.iter().enumerate() {
        let idx = idx + 1;
        let email = email_label(employee);

        let in_flight = spinner(&format!("Submitting {email}..."));
        let result = api.submit(employee);
        in_flight.finish_and_clear();

        match result {
            Ok(()) => {
                summary.succeeded += 1;
                writeln!(out, "[{idx}] SUCCESS: {email}")?;
            }
            Err(e @ SubmissionError::Rejected { .. }) => {
                summary.failed += 1;
                writeln!(out, "[{idx}] FAILED: {email} -> {e}")?;
            }
            Err(e @ SubmissionError::Transport(_)) => {
                summary.errored += 1;
                writeln!(out, "[{idx}] ERROR sending {email} -> {e}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Bulk upload complete.")?;
    Ok(summary)
}

/// The record's email for report lines; `None` when absent or not a string.
fn email_label(employee: &Employee) -> &str {
    employee.email().unwrap_or("None")
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
