//! Version output parsing with regex extraction.

use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("Invalid regex pattern"))
}

/// Parse a semantic version from CLI output.
///
/// Extracts the first `major.minor.patch` triple from arbitrary text:
///
/// - `smart-commits-ai 1.0.4` -> 1.0.4
/// - `pip 24.0 from /usr/lib/python3/dist-packages/pip (python 3.12)` -> None
/// - `1.0.4\n` -> 1.0.4
///
/// Returns `None` when no triple is present or it is not valid semver.
pub(crate) fn parse_version(output: &str) -> Option<Version> {
    let found = version_regex().find(output)?;
    Version::parse(found.as_str()).ok()
}
