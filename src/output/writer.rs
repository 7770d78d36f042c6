use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes a page's Markdown content into the output directory
///
/// Parent directories are created as needed and an existing file is
/// overwritten silently, so re-running a crawl is idempotent. The content is
/// written in one shot through a scoped file handle; there is no partial
/// state to clean up on failure.
///
/// Returns the full path of the written file.
pub fn write_page(
    output_dir: &Path,
    relative_path: &str,
    content: &str,
) -> std::io::Result<PathBuf> {
    let path = output_dir.join(relative_path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&path)?;
    file.write_all(content.as_bytes())?;

    Ok(path)
}
