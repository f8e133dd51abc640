//! terrahealth: AWS resource health checks from the command line
//!
//! Lists EC2 instances and fetches CloudWatch CPU-utilization metrics,
//! printing results to standard output.

use terrahealth::app::App;
use terrahealth::aws::{CloudWatchAdapter, Ec2Adapter};
use terrahealth::error::Error;
use tracing::info;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    info!(args = ?args, "terrahealth invoked");

    let app = App::new(Ec2Adapter::new(), CloudWatchAdapter::new());

    let mut stdout = std::io::stdout();
    if let Err(e) = app.run(&args, &mut stdout).await {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print error in a user-friendly way
fn print_error(e: &Error) {
    use std::io::Write;

    let mut stderr = std::io::stderr();

    let _ = writeln!(stderr, "\x1b[1;31mError:\x1b[0m {e}");

    // Print error chain (causes)
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        let _ = writeln!(stderr, "  \x1b[33mCaused by:\x1b[0m {cause}");
        source = cause.source();
    }
}
