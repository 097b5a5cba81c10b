use clap::Parser;
use code_tally_cli::args::Args;
use code_tally_cli::error::Result;
use code_tally_cli::prompt::{Prompter, TerminalPrompter};
use code_tally_cli::{config, presentation};
use code_tally_engine::report::Report;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.output.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; `CODE_TALLY_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env("CODE_TALLY_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    if args.output.list_languages {
        let table = config::load_table(args)?;
        print!("{}", presentation::render_languages(&table));
        return Ok(());
    }

    let mut prompter = args
        .scope
        .interactive
        .then(|| TerminalPrompter::new(std::io::stdin().lock(), std::io::stderr()));
    let run_config = config::prepare(
        args,
        prompter.as_mut().map(|p| p as &mut dyn Prompter),
    )?;

    let result = code_tally_engine::run(&run_config)?;
    let report = Report::new(
        result.stats,
        &run_config.include_dirs,
        &run_config.exclude_patterns,
    );
    print!("{}", presentation::render(&report, args.output.format)?);
    Ok(())
}
