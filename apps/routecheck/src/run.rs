//! Check driver.
//!
//! Enumerates pages once, loads the route set once, then cross-references
//! and inspects each page in order. The summary is written to the log file
//! only after every page has been processed, so an aborted run leaves any
//! previous report untouched.

use crate::config::Effective;
use crate::error::CheckError;
use crate::inspect::inspect_page;
use crate::models::{PageResult, RunSummary};
use crate::output::Reporter;
use crate::pages::find_pages;
use crate::routes::RouteSet;
use std::fs;
use std::path::Path;

/// Run the check and write the JSON report to `eff.log_file`.
pub fn run_check(eff: &Effective, reporter: &mut dyn Reporter) -> Result<RunSummary, CheckError> {
    let pages = find_pages(&eff.pages_dir, &eff.page_ext)?;
    reporter.started(pages.len());
    let routes = RouteSet::load(&eff.routes_dir, &eff.route_ext, eff.read_policy)?;

    let total = pages.len();
    let mut results: Vec<PageResult> = Vec::with_capacity(total);
    for (i, page) in pages.iter().enumerate() {
        let found = routes.routes_for(&page.name, &eff.import_marker);
        let issues = inspect_page(&page.absolute_path, eff.read_policy)?;
        let result = PageResult::new(i + 1, page, found, issues);
        reporter.page_checked(&result, total);
        results.push(result);
    }

    let summary = RunSummary::from_results(results);
    write_report(&eff.log_file, &summary)?;
    Ok(summary)
}

/// Serialize `summary` as pretty JSON, replacing any existing file.
pub fn write_report(path: &Path, summary: &RunSummary) -> Result<(), CheckError> {
    let body = serde_json::to_string_pretty(summary)?;
    fs::write(path, body).map_err(|source| CheckError::WriteReport {
        path: path.to_path_buf(),
        source,
    })
}
