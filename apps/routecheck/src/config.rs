//! Configuration discovery and effective settings resolution.
//!
//! routecheck reads `routecheck.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `pages`: `apps/web/app/components/magic-patterns/pages`
//! - `routes`: `apps/web/app/routes`
//! - `log`: `MAGIC-PATTERNS-CHECK-LOG.json`
//! - `pageExt` / `routeExt`: `.tsx`
//! - `importMarker`: `magic-patterns`
//! - `output`: `human`
//! - `onReadError`: `best-effort`
//! - `strict`: false
//!
//! Overrides precedence: CLI > config file > defaults. Relative paths are
//! resolved against the repository root.

use crate::error::CheckError;
use crate::models::policy::ReadPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGES_DIR: &str = "apps/web/app/components/magic-patterns/pages";
pub const DEFAULT_ROUTES_DIR: &str = "apps/web/app/routes";
pub const DEFAULT_LOG_FILE: &str = "MAGIC-PATTERNS-CHECK-LOG.json";
pub const DEFAULT_EXT: &str = ".tsx";
pub const DEFAULT_IMPORT_MARKER: &str = "magic-patterns";

const CONFIG_NAMES: [&str; 3] = ["routecheck.toml", "routecheck.yaml", "routecheck.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `routecheck.toml|yaml`.
pub struct RoutecheckConfig {
    pub pages: Option<String>,
    pub routes: Option<String>,
    pub log: Option<String>,
    #[serde(rename = "pageExt")]
    pub page_ext: Option<String>,
    #[serde(rename = "routeExt")]
    pub route_ext: Option<String>,
    #[serde(rename = "importMarker")]
    pub import_marker: Option<String>,
    pub output: Option<String>,
    #[serde(rename = "onReadError")]
    pub on_read_error: Option<String>,
    pub strict: Option<bool>,
}

#[derive(Debug, Default, Clone)]
/// Flags collected from the command line; `None` defers to config/defaults.
pub struct CliOverrides {
    pub repo_root: Option<String>,
    pub pages: Option<String>,
    pub routes: Option<String>,
    pub log: Option<String>,
    pub output: Option<String>,
    pub on_read_error: Option<String>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration passed to the run after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub pages_dir: PathBuf,
    pub routes_dir: PathBuf,
    pub log_file: PathBuf,
    pub page_ext: String,
    pub route_ext: String,
    pub import_marker: String,
    pub output: String,
    pub read_policy: ReadPolicy,
    pub strict: bool,
    /// Whether a config file was found under `repo_root`.
    pub config_found: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `routecheck.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `RoutecheckConfig` from `routecheck.toml` or `routecheck.yaml|yml`.
///
/// Returns `Ok(None)` when no config file exists; a file that exists but
/// cannot be read or parsed is a configuration error.
pub fn load_config(root: &Path) -> Result<Option<RoutecheckConfig>, CheckError> {
    let toml_path = root.join("routecheck.toml");
    if toml_path.exists() {
        let s = read_config(&toml_path)?;
        let cfg: RoutecheckConfig = toml::from_str(&s).map_err(|e| {
            CheckError::Config(format!("{} is not valid TOML: {}", toml_path.display(), e))
        })?;
        return Ok(Some(cfg));
    }
    for yml in ["routecheck.yaml", "routecheck.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read_config(&p)?;
            let cfg: RoutecheckConfig = serde_yaml::from_str(&s).map_err(|e| {
                CheckError::Config(format!("{} is not valid YAML: {}", p.display(), e))
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read_config(path: &Path) -> Result<String, CheckError> {
    fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Effective, CheckError> {
    let start = match cli.repo_root.as_deref() {
        Some(s) => PathBuf::from(s),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let pages = pick(&cli.pages, cfg.pages, DEFAULT_PAGES_DIR);
    let routes = pick(&cli.routes, cfg.routes, DEFAULT_ROUTES_DIR);
    let log = pick(&cli.log, cfg.log, DEFAULT_LOG_FILE);
    let page_ext = cfg.page_ext.unwrap_or_else(|| DEFAULT_EXT.to_string());
    let route_ext = cfg.route_ext.unwrap_or_else(|| DEFAULT_EXT.to_string());
    let import_marker = cfg
        .import_marker
        .unwrap_or_else(|| DEFAULT_IMPORT_MARKER.to_string());
    let output = pick(&cli.output, cfg.output, "human");
    let strict = cli.strict.or(cfg.strict).unwrap_or(false);

    if page_ext.is_empty() || route_ext.is_empty() {
        return Err(CheckError::Config(
            "pageExt and routeExt must not be empty".into(),
        ));
    }
    if output != "human" && output != "json" {
        return Err(CheckError::Config(format!(
            "unknown output mode '{}' (expected human|json)",
            output
        )));
    }
    let read_policy = match cli.on_read_error.clone().or(cfg.on_read_error) {
        Some(s) => ReadPolicy::parse(&s).ok_or_else(|| {
            CheckError::Config(format!(
                "unknown read policy '{}' (expected best-effort|fail-fast)",
                s
            ))
        })?,
        None => ReadPolicy::default(),
    };

    Ok(Effective {
        pages_dir: repo_root.join(pages),
        routes_dir: repo_root.join(routes),
        log_file: repo_root.join(log),
        repo_root,
        page_ext,
        route_ext,
        import_marker,
        output,
        read_policy,
        strict,
        config_found,
    })
}

fn pick(cli: &Option<String>, cfg: Option<String>, default: &str) -> String {
    cli.clone()
        .or(cfg)
        .unwrap_or_else(|| default.to_string())
}
