use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failed run, with `stdout` still printed before the `stderr` summary.
    pub fn failure(
        stdout: Option<String>,
        stderr_fmt_args: std::fmt::Arguments<'_>,
    ) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{stderr_fmt_args}")),
            stdout,
        }
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self::failure(None, fmt_args)
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
