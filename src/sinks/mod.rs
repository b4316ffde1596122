//! Append-only summary record stream: path rules, writer, reader, and table output.
mod format;
mod path;
mod reader;
mod writers;


pub use format::render_summary_table;
pub use path::{ensure_jsonl, resolve_result_path};
pub use reader::{parse_summaries, read_summaries};
pub use writers::{SummarySink, persist_summary};
