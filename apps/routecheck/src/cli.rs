//! CLI argument parsing via `clap`.

use crate::config::CliOverrides;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "routecheck",
    version,
    about = "Cross-check UI pages against route files",
    long_about = "routecheck: a one-shot static check that reports which page files are referenced by route files and lists the navigation targets, links and props interfaces found in each page.\n\nConfiguration precedence: CLI > routecheck.toml > defaults.",
    after_help = "Examples:\n  routecheck\n  routecheck check --pages src/pages --routes src/routes --log check.json\n  routecheck check --output json --on-read-error fail-fast"
)]
/// Top-level CLI options and subcommands. No subcommand runs `check`.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current routecheck version.")]
    Version,
    /// Run the page/route check
    #[command(
        about = "Run the page/route check",
        long_about = "Enumerate page files, find the route files referencing each page, inspect page text for navigation targets, and write the JSON report (overwriting any previous one).",
        after_help = "Examples:\n  routecheck check\n  routecheck check --strict"
    )]
    Check(CheckArgs),
}

#[derive(Args, Default)]
pub struct CheckArgs {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Page root directory, relative to the repo root")]
    pub pages: Option<String>,
    #[arg(long, help = "Route root directory, relative to the repo root")]
    pub routes: Option<String>,
    #[arg(long, help = "Report file to write (overwritten)")]
    pub log: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Per-file read failures: best-effort|fail-fast (default: best-effort)")]
    pub on_read_error: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero when any page has no route")]
    pub strict: bool,
}

impl CheckArgs {
    pub fn into_overrides(self) -> CliOverrides {
        CliOverrides {
            repo_root: self.repo_root,
            pages: self.pages,
            routes: self.routes,
            log: self.log,
            output: self.output,
            on_read_error: self.on_read_error,
            strict: if self.strict { Some(true) } else { None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["routecheck"]).unwrap();
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn test_check_flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "routecheck",
            "check",
            "--pages",
            "web/pages",
            "--on-read-error",
            "fail-fast",
            "--strict",
        ])
        .unwrap();
        let Some(Commands::Check(args)) = cli.cmd else {
            panic!("expected check subcommand");
        };
        let ov = args.into_overrides();
        assert_eq!(ov.pages.as_deref(), Some("web/pages"));
        assert_eq!(ov.on_read_error.as_deref(), Some("fail-fast"));
        assert_eq!(ov.strict, Some(true));
        assert!(ov.routes.is_none());
    }

    #[test]
    fn test_strict_absent_defers_to_config() {
        assert_eq!(CheckArgs::default().into_overrides().strict, None);
    }
}
