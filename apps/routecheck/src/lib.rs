//! routecheck core library.
//!
//! A one-shot static check between UI page files and route files: which
//! pages are referenced by routes, and which navigation targets, links and
//! props interfaces each page's text mentions. Matching is textual.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `pages`: Page enumeration, sorted by relative path.
//! - `routes`: Route cross-referencing by logical page name.
//! - `inspect`: Regex passes over page text.
//! - `run`: The driver that composes the passes and writes the report.
//! - `models`: Page descriptors, per-page results, summary, read policy.
//! - `output`: Human/JSON reporters.
//! - `error`: The shared `CheckError`.
//! - `utils`: Console prefixes and walk helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod models;
pub mod output;
pub mod pages;
pub mod routes;
pub mod run;
pub mod utils;
