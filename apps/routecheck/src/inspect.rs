//! Page content inspection.
//!
//! Three independent regex passes over a page's raw text:
//! - `navigate("...")` calls (any of `'`, `"` or backtick quoting),
//! - absolute `href="/..."` targets,
//! - `interface ...Props... { ... }` blocks, matched greedily across lines.
//!
//! Findings keep text order within each pass and are concatenated
//! navigate, link, props. Nothing is deduplicated.

use crate::error::CheckError;
use crate::models::policy::ReadPolicy;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    Navigate(String),
    Link(String),
    Props(String),
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Navigate(t) => write!(f, "Navigate to: {}", t),
            Finding::Link(t) => write!(f, "Link to: {}", t),
            Finding::Props(body) => write!(f, "Props required: {}", body),
        }
    }
}

fn navigate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"navigate\(['"`]([^'"`]+)['"`]\)"#).unwrap())
}

fn href_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"href=['"`]([^'"`]+)['"`]"#).unwrap())
}

fn props_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)interface.*Props.*\{([^}]+)\}").unwrap())
}

fn captures(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn navigate_targets(text: &str) -> Vec<Finding> {
    captures(navigate_re(), text)
        .into_iter()
        .map(Finding::Navigate)
        .collect()
}

/// Only root-relative targets are reported; external and relative links are not.
pub fn link_targets(text: &str) -> Vec<Finding> {
    captures(href_re(), text)
        .into_iter()
        .filter(|t| t.starts_with('/'))
        .map(Finding::Link)
        .collect()
}

pub fn props_blocks(text: &str) -> Vec<Finding> {
    captures(props_re(), text)
        .into_iter()
        .map(|body| Finding::Props(body.trim().to_string()))
        .collect()
}

pub fn inspect_text(text: &str) -> Vec<Finding> {
    let mut out = navigate_targets(text);
    out.extend(link_targets(text));
    out.extend(props_blocks(text));
    out
}

/// Read a page file and render its findings as issue strings.
///
/// A read failure becomes the page's only issue under
/// `ReadPolicy::BestEffort` and an error under `ReadPolicy::FailFast`.
pub fn inspect_page(path: &Path, policy: ReadPolicy) -> Result<Vec<String>, CheckError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(inspect_text(&text).iter().map(|f| f.to_string()).collect()),
        Err(source) => match policy {
            ReadPolicy::BestEffort => Ok(vec![format!("ERROR reading file: {}", source)]),
            ReadPolicy::FailFast => Err(CheckError::Read {
                path: path.to_path_buf(),
                source,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_navigate_all_quote_styles_in_order() {
        let src = r#"
            onClick={() => navigate('/dashboard')}
            onBack={() => navigate("/events")}
            go={() => navigate(`/tickets`)}
            dyn={() => navigate(`/events/${id}`)}
            bad={() => navigate(target)}
        "#;
        let got: Vec<String> = navigate_targets(src).iter().map(|f| f.to_string()).collect();
        assert_eq!(
            got,
            vec![
                "Navigate to: /dashboard",
                "Navigate to: /events",
                "Navigate to: /tickets",
                "Navigate to: /events/${id}",
            ]
        );
    }

    #[test]
    fn test_links_skip_non_absolute() {
        let src = r#"<a href="/settings">S</a><a href="external-site">E</a><a href='https://x.io'>X</a><a href=`/help`>H</a>"#;
        assert_eq!(
            link_targets(src),
            vec![
                Finding::Link("/settings".into()),
                Finding::Link("/help".into())
            ]
        );
    }

    #[test]
    fn test_props_block_trimmed() {
        let src = "interface ButtonProps {\n  label: string;\n  onClick: () => void;\n}\n";
        assert_eq!(
            props_blocks(src),
            vec![Finding::Props("label: string;\n  onClick: () => void;".into())]
        );
    }

    #[test]
    fn test_props_match_is_greedy_across_interfaces() {
        let src = "interface AProps {\n  a: string;\n}\n\ninterface BProps {\n  b: number;\n}\n";
        // Greedy prefix spans both interfaces, so only the last block is captured
        assert_eq!(props_blocks(src), vec![Finding::Props("b: number;".into())]);
    }

    #[test]
    fn test_inspect_text_concatenates_in_pass_order() {
        let src = r#"
export default function Page() {
  return <a href="/settings" onClick={() => navigate('/dashboard')}>x</a>;
}
interface PageProps {
  id: string;
}
"#;
        let got: Vec<String> = inspect_text(src).iter().map(|f| f.to_string()).collect();
        assert_eq!(
            got,
            vec![
                "Navigate to: /dashboard",
                "Link to: /settings",
                "Props required: id: string;",
            ]
        );
    }

    #[test]
    fn test_props_capture_follows_last_brace_after_props() {
        let src = "interface Props {\n  id: string;\n}\nconst el = <X onClick={go} />;\n";
        assert_eq!(props_blocks(src), vec![Finding::Props("go".into())]);
    }

    #[test]
    fn test_inspect_text_keeps_duplicates() {
        let src = "navigate('/a'); navigate('/a');";
        assert_eq!(inspect_text(src).len(), 2);
        assert!(inspect_text("export const x = 1;").is_empty());
    }

    #[test]
    fn test_inspect_page_read_failure_policy() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone.tsx");

        let issues = inspect_page(&missing, ReadPolicy::BestEffort).unwrap();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].starts_with("ERROR reading file: "));

        let err = inspect_page(&missing, ReadPolicy::FailFast).unwrap_err();
        assert!(matches!(err, CheckError::Read { .. }));
    }

    #[test]
    fn test_inspect_page_reads_file() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("home.tsx");
        fs::write(&p, "navigate('/dashboard')").unwrap();
        assert_eq!(
            inspect_page(&p, ReadPolicy::BestEffort).unwrap(),
            vec!["Navigate to: /dashboard"]
        );
    }
}
