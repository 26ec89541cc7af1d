//! markdown2html CLI - converts a Markdown file into an HTML file

mod args;

use std::process::ExitCode;

use anyhow::Context;
use args::CliArgs;
use markdown2html::Error;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    match run() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Pre-flight failures print their bare message, nothing else.
        Err(err) if err.is_preflight() => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("conversion failed"),
    }
}

fn run() -> Result<(), Error> {
    let args = CliArgs::parse(std::env::args_os().skip(1))?;
    log::debug!("input={} output={}", args.input.display(), args.output.display());

    let stats = markdown2html::convert_file(&args.input, &args.output)?;
    log::debug!("done after {} lines", stats.lines);
    Ok(())
}
