use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use restaurant_inspector::config::Config;
use restaurant_inspector::inspector;
use restaurant_inspector::report;

/// Main entry point for the inspector.
///
/// Logs go to stderr so stdout carries only the report. Exits 0 when the
/// report completes or the table is empty, 1 on any failure.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restaurant_inspector=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut stdout = std::io::stdout();

    let result = match Config::from_env() {
        Ok(config) => inspector::run(&config, &mut stdout).await,
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        tracing::error!("Inspection failed: {}", e);
        let _ = report::failure(&mut stdout, e);
    }

    ExitCode::from(inspector::exit_status(&result))
}
