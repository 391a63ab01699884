//! Page enumeration.

use crate::error::CheckError;
use crate::models::PageDescriptor;
use crate::utils::{ensure_root, glob_files, relative_to};
use std::path::Path;

/// Collect every page file under `root`, sorted by relative path.
///
/// A missing or unreadable `root` is fatal. Subdirectories that cannot be
/// read during the walk are skipped.
pub fn find_pages(root: &Path, page_ext: &str) -> Result<Vec<PageDescriptor>, CheckError> {
    ensure_root(root, "page")?;
    let mut pages = Vec::new();
    for entry in glob_files(root, page_ext)? {
        let Ok(path) = entry else { continue };
        if !path.is_file() {
            continue;
        }
        let file_name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };
        let name = file_name
            .strip_suffix(page_ext)
            .unwrap_or(&file_name)
            .to_string();
        pages.push(PageDescriptor {
            relative_path: relative_to(&path, root),
            name,
            absolute_path: path,
        });
    }
    pages.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(pages)
}
