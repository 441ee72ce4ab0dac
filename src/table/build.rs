use crate::input::InputError;
use crate::table::{Table, TableError};

/// Fill a table with every remaining record, field `i` going to header `i`.
pub fn build_table<I>(records: I, headers: Vec<String>) -> Result<Table, TableError>
where
    I: IntoIterator<Item = Result<Vec<String>, InputError>>,
{
    let mut table = Table::new(headers)?;
    for record in records {
        table.push_row(record?)?;
    }
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/build.rs"]
mod tests;
