use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::SourceArgs;
use crate::config::Settings;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage3_correlate::{CorrelateRequest, run_stage3_correlate};
use crate::report::json::write_summary;
use crate::report::text::render_correlation;

#[derive(Args, Debug)]
pub struct CorrelateArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// Columns x,y[,z]; z is the control variable
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) columns: Vec<String>,

    /// Average each column per value of this key column first
    #[arg(long)]
    pub(crate) by: Option<String>,

    /// With --by, keep only keys that have a single x value
    #[arg(long, requires = "by")]
    pub(crate) single: bool,

    /// Write the summary as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

pub fn handle(args: CorrelateArgs, settings: &Settings) -> anyhow::Result<()> {
    if !(2..=3).contains(&args.columns.len()) {
        anyhow::bail!("--columns takes 2 or 3 names, got {}", args.columns.len());
    }
    let opts = args.source.read_options(settings)?;

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let ctx = run_stage1(&args.source.input, args.source.header_file.as_deref(), opts)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        format = %ctx.format,
        rows = ctx.table.n_rows(),
        "finished stage"
    );

    let request = CorrelateRequest {
        columns: args.columns,
        by: args.by,
        single: args.single,
    };
    let start = Instant::now();
    info!(stage = "stage3_correlate", "starting stage");
    let summary = run_stage3_correlate(&ctx.table, &request)?;
    info!(
        stage = "stage3_correlate",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    print!("{}", render_correlation(&summary));
    if let Some(path) = args.json {
        write_summary(&path, &summary)?;
    }
    Ok(())
}
