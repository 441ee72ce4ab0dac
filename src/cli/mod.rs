use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Settings;
use crate::input::ReadOptions;

mod correlate;
mod filter;
mod headers;

#[derive(Parser, Debug)]
#[command(name = "tabseq", version, about = "Tabseq CLI")]
pub struct Cli {
    /// Optional TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Headers(headers::HeadersArgs),
    Filter(filter::FilterArgs),
    Correlate(correlate::CorrelateArgs),
}

/// Input file plus an optional separate header file.
#[derive(Args, Debug)]
pub(crate) struct SourceArgs {
    /// Input data file (.csv is read as delimited, anything else is tokenized)
    #[arg(long)]
    pub(crate) input: PathBuf,

    /// Separate file holding the column names
    #[arg(long)]
    pub(crate) header_file: Option<PathBuf>,

    /// Field delimiter, overrides the settings file
    #[arg(long)]
    pub(crate) delimiter: Option<char>,
}

impl SourceArgs {
    pub(crate) fn read_options(&self, settings: &Settings) -> anyhow::Result<ReadOptions> {
        Ok(settings.read_options(self.delimiter)?)
    }
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        let settings = Settings::load(self.config.as_deref())?;
        match self.command {
            Command::Headers(args) => headers::handle(args, &settings),
            Command::Filter(args) => filter::handle(args, &settings),
            Command::Correlate(args) => correlate::handle(args, &settings),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
