pub mod formatter;

pub use formatter::{
    format_json, format_points, format_ranking_table, format_skipped, format_tsv, render,
    should_use_colors, OutputFormat,
};
