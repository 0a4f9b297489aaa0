pub mod file_source;
pub mod parser;

pub use file_source::FileRuleSource;
pub use parser::parse_blocklist;
