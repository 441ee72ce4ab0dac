use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::SourceArgs;
use crate::config::Settings;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_filter::run_stage2_filter;
use crate::pipeline::stage4_write::{filtered_output_path, write_table_csv};
use crate::report::text::render_filter;

#[derive(Args, Debug)]
pub struct FilterArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// Column whose contiguous runs form a group (e.g. an entity id)
    #[arg(long)]
    pub(crate) group: String,

    /// Column that must stay constant within each group
    #[arg(long)]
    pub(crate) property: String,

    /// Output file; defaults to <stem>_<suffix>.<ext> next to the input
    #[arg(long)]
    out: Option<PathBuf>,
}

pub fn handle(args: FilterArgs, settings: &Settings) -> anyhow::Result<()> {
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

    let start = Instant::now();
    info!(stage = "stage2_filter", "starting stage");
    let input_path = ctx.input_path;
    let filtered = run_stage2_filter(ctx.table, &args.group, &args.property)?;
    info!(
        stage = "stage2_filter",
        elapsed_ms = start.elapsed().as_millis(),
        rows_before = filtered.rows_before,
        removed_rows = filtered.outcome.removed_rows,
        "finished stage"
    );
    print!("{}", render_filter(&filtered));

    let out = args
        .out
        .unwrap_or_else(|| filtered_output_path(&input_path, &settings.output.filtered_suffix));
    let start = Instant::now();
    info!(stage = "stage4_write", "starting stage");
    write_table_csv(&out, &filtered.table, opts)?;
    info!(
        stage = "stage4_write",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    Ok(())
}
