use clap::Parser;
use tracing_subscriber::EnvFilter;

use lint_sweep::CancelFlag;
use lint_sweep::cancel::install_interrupt_handler;
use lint_sweep::cli::Cli;
use lint_sweep::commands::run_scan;
use lint_sweep::output::{ColorMode, print_warning};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cancel = CancelFlag::new();
    if let Err(e) = install_interrupt_handler(&cancel) {
        print_warning(ColorMode::Auto, &e.to_string());
    }

    std::process::exit(run_scan(&cli, &cancel));
}

/// Diagnostic logging on stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lint_sweep={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
