//! Utility functions for archive naming on the device file system

/// Directory the navigation unit scans for tour packages
pub const ROUTES_DIR: &str = "BMWData/Navigation/Routes";

/// Make a route name usable as a single file name on FAT-formatted drives
///
/// Path separators, control characters and `<>:"|?*` become `_`. Leading and
/// trailing whitespace and dots are dropped; an empty result becomes `route`.
pub fn sanitize_file_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim_matches(|c: char| c.is_whitespace() || c == '.');
    if trimmed.is_empty() {
        "route".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Zip entry path of a route's tar.gz package
#[inline]
pub fn archive_entry_path(route_name: &str) -> String {
    format!("{ROUTES_DIR}/{}.tar.gz", sanitize_file_name(route_name))
}
