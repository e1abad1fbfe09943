mod output;

pub use output::{write_csv, write_json, write_summary_json};
