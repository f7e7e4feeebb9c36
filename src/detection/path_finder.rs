//! PATH-based executable lookup with fallback locations.

use std::path::PathBuf;

/// System fallback directories checked when PATH lookup misses.
const FALLBACK_DIRS: &[&str] = &["/usr/local/bin", "/usr/bin"];

/// Per-user directories (relative to `$HOME`) where `pip install --user`
/// and similar tools place scripts that are often missing from PATH.
const HOME_FALLBACK_DIRS: &[&str] = &[".local/bin", "bin"];

/// Find an executable by name.
///
/// PATH is searched first via the `which` crate. If the name is not found
/// there, common system and per-user script directories are checked.
///
/// # Arguments
///
/// * `name` - The executable name to search for (e.g., "python3")
///
/// # Returns
///
/// `Some(PathBuf)` if the executable is found, `None` otherwise.
///
/// # Example
///
/// ```rust
/// use smart_commits_shim::find_executable;
///
/// assert!(find_executable("definitely_not_a_real_executable_12345").is_none());
/// ```
pub fn find_executable(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    let home = std::env::var_os("HOME").map(PathBuf::from);
    let home_dirs = home
        .iter()
        .flat_map(|home| HOME_FALLBACK_DIRS.iter().map(move |dir| home.join(dir)));

    FALLBACK_DIRS
        .iter()
        .map(PathBuf::from)
        .chain(home_dirs)
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}
