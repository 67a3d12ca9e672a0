use std::path::Path;
use tracing::warn;

/// `<hash>  <path>` per document, in index order.
pub fn run(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let mut lines = Vec::new();
    for document in scipstore_core::correlate(&bytes)? {
        if let Some(err) = &document.err {
            warn!(path = %document.path, "{err}");
        }
        lines.push(format!("{}  {}", document.hash, document.path));
    }
    Ok(lines)
}
