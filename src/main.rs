//! SearchJudge - Application Entry Point
//!
//! Runs the binary search exercise once against `/app/input.txt`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use searchjudge::{BinarySearch, CONFIG, Harness};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.logging.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let mut harness = Harness::new(CONFIG.paths.clone(), BinarySearch);
    let code = harness.run();

    tracing::debug!(code, "Exiting");
    std::process::exit(code);
}
