use std::path::Path;

/// Fixed content-type table. Everything outside it, extensionless files
/// included, is served as text/html.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        _ => "text/html",
    }
}
