use std::process;

use imgedit::cli::commands::{execute_command, help_hint};
use imgedit::cli::output;
use imgedit::exitcode;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    setup_logging();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = execute_command(&raw) {
        output::error(&e);
        output::hint(&help_hint());
        process::exit(e.exit_code());
    }
    process::exit(exitcode::OK);
}

fn setup_logging() {
    // Quiet unless RUST_LOG asks for more
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!("INIT: logging ready");
}
