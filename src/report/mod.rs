mod ladder_export;
mod pretty;
mod summary;

pub use ladder_export::{LadderFormat, export_ladder, write_ladder};
pub use pretty::pretty_print_block_stats;
pub use summary::Summary;
