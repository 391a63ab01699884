//! Route cross-referencing.
//!
//! Route files are read once per run into a `RouteSet` and queried per page.
//! A route references a page when its text contains the page's logical name
//! in single or double quotes, or the literal text
//! `import.*<name>.*from.*<marker>`. The last test is plain substring
//! containment; the text is never compiled as a regex.

use crate::error::CheckError;
use crate::models::policy::ReadPolicy;
use crate::utils::{ensure_root, glob_files, relative_to};
use std::fs;
use std::path::Path;

/// True when `content` references the page `name`.
pub fn references_page(content: &str, name: &str, import_marker: &str) -> bool {
    let import_literal = format!("import.*{}.*from.*{}", name, import_marker);
    content.contains(&import_literal)
        || content.contains(&format!("'{}'", name))
        || content.contains(&format!("\"{}\"", name))
}

struct RouteFile {
    relative_path: String,
    content: String,
}

/// Readable route files under a route root, in walk order.
pub struct RouteSet {
    files: Vec<RouteFile>,
}

impl RouteSet {
    /// Walk `root` once and read every route file.
    ///
    /// Under `ReadPolicy::BestEffort`, unreadable files and directories are
    /// dropped without trace; under `ReadPolicy::FailFast` the first failure
    /// is returned.
    pub fn load(root: &Path, route_ext: &str, policy: ReadPolicy) -> Result<Self, CheckError> {
        ensure_root(root, "route")?;
        let mut files = Vec::new();
        for entry in glob_files(root, route_ext)? {
            let path = match entry {
                Ok(p) => p,
                Err(e) => match policy {
                    ReadPolicy::BestEffort => continue,
                    ReadPolicy::FailFast => return Err(CheckError::from_glob(e)),
                },
            };
            if !path.is_file() {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(content) => files.push(RouteFile {
                    relative_path: relative_to(&path, root),
                    content,
                }),
                Err(source) => match policy {
                    ReadPolicy::BestEffort => {}
                    ReadPolicy::FailFast => return Err(CheckError::Read { path, source }),
                },
            }
        }
        Ok(RouteSet { files })
    }

    /// Relative paths of route files referencing `name`, in walk order.
    pub fn routes_for(&self, name: &str, import_marker: &str) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| references_page(&f.content, name, import_marker))
            .map(|f| f.relative_path.clone())
            .collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.files.len()
    }
}
