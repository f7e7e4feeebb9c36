//! Host detection helpers.
//!
//! - `find_executable`: PATH-based executable lookup with fallbacks
//! - `parse_version`: regex-based version extraction from CLI output

mod parser;
mod path_finder;

pub(crate) use parser::parse_version;
pub use path_finder::find_executable;
