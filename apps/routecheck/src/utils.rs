//! Console prefixes and filesystem walk helpers shared across modules.

use crate::error::CheckError;
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

/// Colors are off in json mode and when `NO_COLOR` is set.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix(color: bool) -> String {
    if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix(color: bool) -> String {
    if color {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix(color: bool) -> String {
    if color {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Render a fatal error and its source chain, one cause per line.
pub fn render_error(err: &dyn std::error::Error, color: bool) -> String {
    let mut out = format!("{} {}", error_prefix(color), err);
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    out
}

/// Fail unless `root` exists and can be listed.
pub fn ensure_root(root: &Path, kind: &'static str) -> Result<(), CheckError> {
    if !root.exists() {
        return Err(CheckError::MissingRoot {
            kind,
            path: root.to_path_buf(),
        });
    }
    fs::read_dir(root)
        .map(|_| ())
        .map_err(|source| CheckError::UnreadableRoot {
            kind,
            path: root.to_path_buf(),
            source,
        })
}

/// Recursively match every path under `root` ending with `ext`.
///
/// Entries come back in the glob crate's alphabetical walk order; an `Err`
/// entry marks a directory that could not be read. Paths reached through a
/// symlinked directory are dropped, so the walk never leaves the real tree.
pub fn glob_files(
    root: &Path,
    ext: &str,
) -> Result<impl Iterator<Item = glob::GlobResult>, CheckError> {
    let base = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!(
        "{}/**/*{}",
        base.trim_end_matches('/'),
        glob::Pattern::escape(ext)
    );
    let root = root.to_path_buf();
    Ok(glob::glob(&pattern)?.filter(move |entry| match entry {
        Ok(path) => !under_symlinked_dir(path, &root),
        Err(_) => true,
    }))
}

/// True when a directory between `root` and `path` is a symlink.
fn under_symlinked_dir(path: &Path, root: &Path) -> bool {
    let Ok(rel) = path.strip_prefix(root) else {
        return false;
    };
    let mut cur = root.to_path_buf();
    let Some(parent) = rel.parent() else {
        return false;
    };
    parent.components().any(|c| {
        cur.push(c);
        fs::symlink_metadata(&cur)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
    })
}

/// Path of `path` relative to `root`, falling back to `path` itself.
pub fn relative_to(path: &Path, root: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}
