//! routecheck CLI binary entry point.
//! Resolves configuration, runs the check and prints results.

use clap::Parser;
use routecheck::cli::{CheckArgs, Cli, Commands};
use routecheck::output::{self, HumanReporter, Reporter, SilentReporter};
use routecheck::utils::{info_prefix, note_prefix, render_error, use_colors};
use routecheck::{config, run};

fn main() {
    let cli = Cli::parse();
    let args = match cli.cmd {
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Some(Commands::Check(args)) => args,
        None => CheckArgs::default(),
    };

    // Before the config is resolved, only the CLI flag can select json mode
    let early_color = use_colors(args.output.as_deref().unwrap_or("human"));
    let eff = match config::resolve_effective(&args.into_overrides()) {
        Ok(eff) => eff,
        Err(e) => fail(&e, early_color),
    };
    let human = eff.output != "json";
    let color = use_colors(&eff.output);
    if human {
        if !eff.config_found {
            eprintln!("{} No routecheck.toml found; using defaults.", note_prefix(color));
        }
        eprintln!(
            "{} pages={} routes={} on-read-error={}",
            info_prefix(color),
            eff.pages_dir.display(),
            eff.routes_dir.display(),
            eff.read_policy
        );
    }

    let mut reporter: Box<dyn Reporter> = if human {
        Box::new(HumanReporter::new())
    } else {
        Box::new(SilentReporter)
    };
    let summary = match run::run_check(&eff, reporter.as_mut()) {
        Ok(s) => s,
        Err(e) => fail(&e, color),
    };
    reporter.finished(&summary, &eff.log_file);
    if !human {
        if let Err(e) = output::print_json(&summary) {
            fail(&e, color);
        }
    }

    if eff.strict && summary.pages_without_routes > 0 {
        std::process::exit(1);
    }
}

fn fail(err: &dyn std::error::Error, color: bool) -> ! {
    eprintln!("{}", render_error(err, color));
    std::process::exit(2);
}
