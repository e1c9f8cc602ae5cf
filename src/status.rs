use std::process::ExitCode;

/// Terminal outcome of an invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Finished without problems. Also used when there was nothing to do,
    /// e.g. when the working directory holds no project manifest.
    Success,
    /// Finished, but the user asked for something that ends the run early
    /// (the help output) or the dispatched collaborator reported findings.
    Failure,
    /// elm-analyse itself hard-errored.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
