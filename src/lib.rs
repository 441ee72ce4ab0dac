pub mod cli;
pub mod config;
pub mod input;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod table;

pub mod prelude {
    pub use crate::input::tokenize::{tokenize, tokenize_with};
    pub use crate::input::{ReadOptions, RecordReader, SourceFormat};
    pub use crate::stats::correlation::{partial_correlation, pearson};
    pub use crate::table::Table;
    pub use crate::table::build::build_table;
    pub use crate::table::filter::filter_inconsistent_groups;
}
