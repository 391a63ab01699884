//! Output rendering for check runs.
//!
//! Supports `human` (default) and `json` outputs. Human output streams
//! progress per page; JSON output prints the same document that is written
//! to the log file, once the run is done.

use crate::models::{PageResult, RunSummary};
use owo_colors::OwoColorize;
use std::path::Path;

/// Receives progress events from the check driver.
pub trait Reporter {
    fn started(&mut self, total: usize);
    fn page_checked(&mut self, result: &PageResult, total: usize);
    fn finished(&mut self, summary: &RunSummary, log_file: &Path);
}

/// Prints nothing.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn started(&mut self, _total: usize) {}
    fn page_checked(&mut self, _result: &PageResult, _total: usize) {}
    fn finished(&mut self, _summary: &RunSummary, _log_file: &Path) {}
}

/// Line-oriented console progress with emoji status markers.
pub struct HumanReporter {
    color: bool,
}

impl HumanReporter {
    pub fn new() -> Self {
        HumanReporter {
            color: crate::utils::use_colors("human"),
        }
    }
}

impl Default for HumanReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for HumanReporter {
    fn started(&mut self, total: usize) {
        println!("Starting route integration check...");
        println!("Found {} pages", total);
    }

    fn page_checked(&mut self, result: &PageResult, total: usize) {
        for line in page_lines(result, total, self.color) {
            println!("{}", line);
        }
    }

    fn finished(&mut self, summary: &RunSummary, log_file: &Path) {
        for line in summary_lines(summary, log_file, self.color) {
            println!("{}", line);
        }
    }
}

/// Lines printed for one page (pure, for testing).
pub fn page_lines(result: &PageResult, total: usize, color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let header = format!("Checking page {}/{}: {}", result.index, total, result.page);
    lines.push(String::new());
    lines.push(if color {
        header.bold().to_string()
    } else {
        header
    });
    if result.has_route {
        let found = format!("Routes found: {}", result.routes_found.join(", "));
        lines.push(if color {
            format!("  ✅ {}", found.green())
        } else {
            format!("  ✅ {}", found)
        });
    } else if color {
        lines.push(format!("  ❌ {}", "NO ROUTE FOUND".red().bold()));
    } else {
        lines.push("  ❌ NO ROUTE FOUND".to_string());
    }
    if !result.navigation_issues.is_empty() {
        let items = format!(
            "Navigation/Props: {} items to check",
            result.navigation_issues.len()
        );
        lines.push(if color {
            format!("  ⚠️  {}", items.yellow())
        } else {
            format!("  ⚠️  {}", items)
        });
    }
    lines
}

/// Closing totals (pure, for testing).
pub fn summary_lines(summary: &RunSummary, log_file: &Path, color: bool) -> Vec<String> {
    let saved = format!("Results saved to: {}", log_file.display());
    let without = format!("Pages WITHOUT routes: {}", summary.pages_without_routes);
    vec![
        String::new(),
        String::new(),
        if color { saved.bold().to_string() } else { saved },
        format!("Total pages: {}", summary.total_pages),
        format!("Pages with routes: {}", summary.pages_with_routes),
        if color && summary.pages_without_routes > 0 {
            without.red().to_string()
        } else {
            without
        },
    ]
}

/// Print the summary as pretty JSON on stdout.
pub fn print_json(summary: &RunSummary) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageDescriptor;
    use std::path::PathBuf;

    fn result(routes: Vec<String>, issues: Vec<String>) -> PageResult {
        let page = PageDescriptor {
            relative_path: "events/EventsPage.tsx".into(),
            name: "EventsPage".into(),
            absolute_path: PathBuf::from("/p/events/EventsPage.tsx"),
        };
        PageResult::new(3, &page, routes, issues)
    }

    #[test]
    fn test_page_lines_with_routes_and_issues() {
        let r = result(
            vec!["events.tsx".into(), "home.tsx".into()],
            vec!["Navigate to: /x".into(), "Link to: /y".into()],
        );
        let lines = page_lines(&r, 10, false);
        assert_eq!(
            lines,
            vec![
                "",
                "Checking page 3/10: events/EventsPage.tsx",
                "  ✅ Routes found: events.tsx, home.tsx",
                "  ⚠️  Navigation/Props: 2 items to check",
            ]
        );
    }

    #[test]
    fn test_page_lines_without_route_or_issues() {
        let lines = page_lines(&result(vec![], vec![]), 3, false);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "  ❌ NO ROUTE FOUND");
    }

    #[test]
    fn test_summary_lines_totals() {
        let s = RunSummary::from_results(vec![result(vec![], vec![])]);
        let lines = summary_lines(&s, Path::new("/tmp/log.json"), false);
        assert_eq!(lines[2], "Results saved to: /tmp/log.json");
        assert_eq!(lines[3], "Total pages: 1");
        assert_eq!(lines[4], "Pages with routes: 0");
        assert_eq!(lines[5], "Pages WITHOUT routes: 1");
    }

    #[test]
    fn test_colored_lines_keep_text() {
        let lines = page_lines(&result(vec![], vec![]), 1, true);
        assert!(lines[2].contains("NO ROUTE FOUND"));
    }
}
