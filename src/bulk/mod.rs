pub mod import;
pub mod parse;
pub mod report;

pub use import::{import_candidates, import_hiring_managers, import_projects};
pub use parse::{parse_candidates, parse_hiring_managers, parse_projects, LineError, ParsedBatch};
pub use report::ImportReport;
