//! Positional command-line arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use markdown2html::Error;

/// `markdown2html <input> <output>`
#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    ///
    /// Exactly two arguments are accepted; any other count is a usage error.
    pub fn parse<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        match (args.next(), args.next(), args.next()) {
            (Some(input), Some(output), None) => Ok(Self {
                input: input.into(),
                output: output.into(),
            }),
            _ => Err(Error::Usage),
        }
    }
}
