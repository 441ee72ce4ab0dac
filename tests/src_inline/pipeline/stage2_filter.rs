use super::*;
use crate::input::tokenize::tokenize;
use crate::table::build::build_table;

fn table(lines: &[&str]) -> Table {
    let headers = tokenize(lines[0]);
    build_table(lines[1..].iter().map(|l| Ok(tokenize(l))), headers).expect("table")
}

#[test]
fn reports_rows_before_and_removed() {
    let t = table(&["id,disadv", "A,x", "A,y", "B,p", "B,p"]);
    let ctx = run_stage2_filter(t, "id", "disadv").expect("stage2");
    assert_eq!(ctx.rows_before, 4);
    assert_eq!(ctx.outcome.removed_rows, 2);
    assert_eq!(ctx.table.n_rows(), 2);
    assert_eq!(ctx.group_column, "id");
    assert_eq!(ctx.property_column, "disadv");
}

#[test]
fn missing_column_is_wrapped() {
    let t = table(&["id,disadv", "A,x"]);
    let err = run_stage2_filter(t, "id", "lep").unwrap_err();
    assert!(matches!(
        err,
        Stage2Error::Table(TableError::MissingColumn { .. })
    ));
}
