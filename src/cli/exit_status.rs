use std::process::ExitCode;

/// Process exit status of a `tscat` invocation.
///
/// - `Success` (0): nothing to report, or only warnings
/// - `Failure` (1): errors were found in the catalogs (parse errors, placeholder mismatches)
/// - `Error` (2): the command itself could not run (bad config, missing translations directory)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a finished command. Warnings never fail a run.
    pub fn from_error_count(error_count: usize, exit_on_errors: bool) -> Self {
        if exit_on_errors && error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
