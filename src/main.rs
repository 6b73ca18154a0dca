// CLI entry point. The lib.rs file serves as the public API for external
// consumers; all the logic lives in the library modules.

use asset_optimizer::{processing, PerformanceReport};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();

    info!("{}", "=".repeat(60));
    info!("ASSET OPTIMIZATION - Mobile Performance");
    info!("{}", "=".repeat(60));

    let summary = processing::run(Path::new("assets"));

    // Per-file failures were already logged; the process still exits 0.
    println!("{}", PerformanceReport::from_summary(summary));
}
