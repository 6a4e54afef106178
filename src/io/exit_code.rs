//! Process exit codes shared by every command.

/// Exit status of a CLI invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Symbol model missing or malformed
    ModelError = 2,
    /// Nothing to output
    NotFound = 3,
    /// Index or hierarchy construction failed
    GenerationError = 4,
    ConfigError = 5,
}

impl ExitCode {
    pub fn is_success(&self) -> bool {
        *self == ExitCode::Success
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
