use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use clap::Parser;

use crate::types::CredentialPair;

/// Print the account and principal behind an AWS access key pair.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(value_name = "access_key_id", allow_hyphen_values = true)]
    pub access_key_id: OsString,
    #[arg(value_name = "secret_access_key_id", allow_hyphen_values = true)]
    pub secret_access_key: OsString,
}

impl Cli {
    /// Bytes that are not valid UTF-8 become U+FFFD; STS then rejects the pair.
    pub fn into_credentials(self) -> CredentialPair {
        CredentialPair::new(
            self.access_key_id.to_string_lossy(),
            self.secret_access_key.to_string_lossy(),
        )
    }
}

/// Wrong number of positional arguments. Displays as the usage line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    pub program: String,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <access_key_id> <secret_access_key_id>", self.program)
    }
}

impl std::error::Error for UsageError {}

fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Parses a full argv, program name included.
///
/// The raw token count decides the usage gate: anything other than the
/// program name plus two values is a `UsageError`, whatever the tokens are.
pub fn parse_args<I, T>(args: I) -> Result<Cli, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());

    if args.len() != 3 {
        return Err(UsageError { program });
    }

    // After a leading `--` clap takes every token as a value, a literal `--` included.
    let argv = [
        args[0].clone(),
        OsString::from("--"),
        args[1].clone(),
        args[2].clone(),
    ];

    Cli::try_parse_from(argv).map_err(|_| UsageError { program })
}
