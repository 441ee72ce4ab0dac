use clap::Args;

use crate::cli::SourceArgs;
use crate::config::Settings;
use crate::input::RecordReader;
use crate::input::headers::resolve_headers;

#[derive(Args, Debug)]
pub struct HeadersArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

pub fn handle(args: HeadersArgs, settings: &Settings) -> anyhow::Result<()> {
    let opts = args.source.read_options(settings)?;
    let mut records = RecordReader::open(&args.source.input, opts)?;
    let headers = resolve_headers(&mut records, args.source.header_file.as_deref(), opts)?;
    if headers.is_empty() {
        anyhow::bail!("no column headers found");
    }
    println!("{}", serde_json::to_string_pretty(&headers)?);
    Ok(())
}
