use std::path::Path;

/// Render a relative path with forward-slash separators, as used for both
/// pattern matching and zip entry names.
pub fn to_posix_string(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
