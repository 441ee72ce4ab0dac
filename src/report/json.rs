use crate::pipeline::stage3_correlate::CorrelateCtx;

pub type Summary = CorrelateCtx;

pub fn write_summary(path: &std::path::Path, summary: &Summary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}
