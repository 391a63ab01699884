//! Shared data models for the check run and its JSON report.

pub mod policy;

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A discovered page file.
pub struct PageDescriptor {
    /// Path relative to the page root, used as the sort key.
    pub relative_path: String,
    /// File name without the page extension; the cross-reference key.
    pub name: String,
    pub absolute_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NO ROUTE")]
    NoRoute,
}

#[derive(Debug, Clone, Serialize)]
/// Per-page outcome. Field order is the report's key order.
pub struct PageResult {
    pub index: usize,
    pub page: String,
    pub name: String,
    pub routes_found: Vec<String>,
    pub has_route: bool,
    pub navigation_issues: Vec<String>,
    pub status: PageStatus,
}

impl PageResult {
    /// Build a result; `has_route` and `status` follow from `routes_found`.
    pub fn new(
        index: usize,
        page: &PageDescriptor,
        routes_found: Vec<String>,
        navigation_issues: Vec<String>,
    ) -> Self {
        let has_route = !routes_found.is_empty();
        PageResult {
            index,
            page: page.relative_path.clone(),
            name: page.name.clone(),
            routes_found,
            has_route,
            navigation_issues,
            status: if has_route {
                PageStatus::Ok
            } else {
                PageStatus::NoRoute
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Aggregate written to the log file.
pub struct RunSummary {
    pub total_pages: usize,
    pub pages_with_routes: usize,
    pub pages_without_routes: usize,
    pub results: Vec<PageResult>,
}

impl RunSummary {
    pub fn from_results(results: Vec<PageResult>) -> Self {
        let with = results.iter().filter(|r| r.has_route).count();
        RunSummary {
            total_pages: results.len(),
            pages_with_routes: with,
            pages_without_routes: results.len() - with,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rel: &str, name: &str) -> PageDescriptor {
        PageDescriptor {
            relative_path: rel.into(),
            name: name.into(),
            absolute_path: PathBuf::from("/pages").join(rel),
        }
    }

    #[test]
    fn status_follows_routes_found() {
        let ok = PageResult::new(1, &page("a.tsx", "a"), vec!["r.tsx".into()], vec![]);
        assert!(ok.has_route);
        assert_eq!(ok.status, PageStatus::Ok);

        let orphan = PageResult::new(2, &page("b.tsx", "b"), vec![], vec!["x".into()]);
        assert!(!orphan.has_route);
        assert_eq!(orphan.status, PageStatus::NoRoute);
    }

    #[test]
    fn summary_counts_add_up() {
        let results = vec![
            PageResult::new(1, &page("a.tsx", "a"), vec!["r.tsx".into()], vec![]),
            PageResult::new(2, &page("b.tsx", "b"), vec![], vec![]),
            PageResult::new(3, &page("c/d.tsx", "d"), vec![], vec![]),
        ];
        let s = RunSummary::from_results(results);
        assert_eq!(s.total_pages, 3);
        assert_eq!(s.pages_with_routes, 1);
        assert_eq!(s.pages_without_routes, 2);
        assert_eq!(s.pages_with_routes + s.pages_without_routes, s.results.len());
    }

    #[test]
    fn report_shape_and_key_order() {
        let s = RunSummary::from_results(vec![PageResult::new(
            1,
            &page("home.tsx", "home"),
            vec![],
            vec![],
        )]);
        let out = serde_json::to_string_pretty(&s).unwrap();
        let keys = [
            "\"total_pages\"",
            "\"pages_with_routes\"",
            "\"pages_without_routes\"",
            "\"results\"",
            "\"index\"",
            "\"page\"",
            "\"name\"",
            "\"routes_found\"",
            "\"has_route\"",
            "\"navigation_issues\"",
            "\"status\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| out.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(out.contains("\"status\": \"NO ROUTE\""));
    }
}
