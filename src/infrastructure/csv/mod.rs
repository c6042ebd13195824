// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Forgiving scanner for sheet exports, plus RFC-4180 writing.

pub mod parser;
pub mod writer;

pub use parser::{parse_records, scan_rows};
pub use writer::write_records;
