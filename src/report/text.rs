use crate::pipeline::stage2_filter::FilterCtx;
use crate::pipeline::stage3_correlate::CorrelateCtx;

pub fn render_correlation(ctx: &CorrelateCtx) -> String {
    let name = |i: usize| ctx.columns.get(i).map_or("-", String::as_str);
    let (x, y, z) = (name(0), name(1), name(2));

    let mut out = String::new();
    out.push_str("Correlation Report\n");
    out.push_str("==================\n\n");
    match &ctx.by {
        Some(key) => out.push_str(&format!(
            "Observations: {} (means per {})\n",
            ctx.observations, key
        )),
        None => out.push_str(&format!("Observations: {}\n", ctx.observations)),
    }
    if ctx.dropped_multi > 0 {
        out.push_str(&format!(
            "Keys dropped for multiple {} values: {}\n",
            x, ctx.dropped_multi
        ));
    }
    out.push('\n');

    out.push_str("Pairwise:\n");
    out.push_str(&format!("- r({x}, {y}): {:.6}\n", ctx.pairwise.rxy));
    if ctx.columns.len() > 2 {
        out.push_str(&format!("- r({x}, {z}): {:.6}\n", ctx.pairwise.rxz));
        out.push_str(&format!("- r({y}, {z}): {:.6}\n", ctx.pairwise.ryz));
        out.push('\n');
        out.push_str("Partial:\n");
        out.push_str(&format!("- r({x}, {y} | {z}): {:.6}\n", ctx.partial.rxy_z));
        out.push_str(&format!("- r({x}, {z} | {y}): {:.6}\n", ctx.partial.rxz_y));
        out.push_str(&format!("- r({y}, {z} | {x}): {:.6}\n", ctx.partial.ryz_x));
    }

    out
}

pub fn render_filter(ctx: &FilterCtx) -> String {
    format!(
        "Total lines removed: {} ({} of {} groups by {} changed {})\n",
        ctx.outcome.removed_rows,
        ctx.outcome.removed_groups,
        ctx.outcome.removed_groups + ctx.outcome.kept_groups,
        ctx.group_column,
        ctx.property_column,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
