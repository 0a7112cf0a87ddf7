use anyhow::Context;
use clap::Parser;
use gw_config::GroundworkConfig;
use gw_view::ViewError;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

/// Exit code for an unknown project or archived record id.
const EXIT_NOT_FOUND: i32 = 2;

fn main() {
    if let Err(error) = run() {
        let (message, code) = report(&error);
        eprintln!("{message}");
        std::process::exit(code);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = GroundworkConfig::load_with_dotenv().context("failed to load groundwork config")?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(&config, flags.fixture.as_deref())?;
    commands::dispatch::dispatch(&cli.command, &ctx, &flags)
}

/// Unknown ids get their own message and exit code; everything else is a
/// plain `gw error:` line with the full cause chain.
fn report(error: &anyhow::Error) -> (String, i32) {
    let not_found = error
        .downcast_ref::<ViewError>()
        .is_some_and(ViewError::is_not_found);

    if not_found {
        (
            format!("gw: {error}\nrun `gw projects` to list project ids (add `--status complete` for archived ones)"),
            EXIT_NOT_FOUND,
        )
    } else {
        (format!("gw error: {error:#}"), 1)
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GROUNDWORK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
