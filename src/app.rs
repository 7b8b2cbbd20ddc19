use std::ffi::OsString;
use std::io::Write;

use crate::cli;
use crate::commands::whoami::WhoamiCommand;
use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Usage,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage | ExitStatus::Failure => 1,
        }
    }
}

/// Runs one invocation end to end and reports how the process should exit.
///
/// The usage line and the identity lines go to `out`. A failed lookup writes
/// only the error chain to `err`.
pub async fn run<I, T>(
    context: &Context,
    args: I,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = match cli::parse_args(args) {
        Ok(cli) => cli,
        Err(usage) => {
            writeln!(out, "{}", usage).ok();
            return ExitStatus::Usage;
        }
    };

    let credentials = cli.into_credentials();

    match WhoamiCommand::run(context, &credentials, out).await {
        Ok(()) => ExitStatus::Success,
        Err(e) => {
            writeln!(err, "Error: {:?}", e).ok();
            ExitStatus::Failure
        }
    }
}
