//! Sequential batch runner over the asset manifests.
//!
//! Every entry is handled independently: a missing input is a skip, a
//! failed backup or optimization is logged and counted, and in all cases
//! the loop moves on to the next entry.

use crate::core::{FRAME_COUNT, FRAME_TARGET, MAIN_ASSETS, TargetSize, frame_files};
use crate::processing::ImageOptimizer;
use crate::utils;
use serde::Serialize;
use std::path::Path;
use tracing::{error, info, warn};

/// Aggregated outcome of one batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    /// Files resized and rewritten
    pub optimized: usize,
    /// Manifest entries whose input did not exist
    pub skipped: usize,
    /// Files that failed to back up or process
    pub failed: usize,
    /// Combined size of all optimized inputs, in bytes
    #[serde(rename = "totalOriginalBytes")]
    pub total_original_bytes: u64,
    /// Combined size of all optimized outputs, in bytes
    #[serde(rename = "totalOptimizedBytes")]
    pub total_optimized_bytes: u64,
}

/// Process both manifests under `assets_root`, in listed order.
///
/// Never fails: per-file errors are logged and tallied in the returned
/// summary.
pub fn run(assets_root: &Path) -> BatchSummary {
    let mut summary = BatchSummary::default();

    info!("📦 Optimizing main assets...");
    for entry in MAIN_ASSETS {
        process_entry(assets_root, Path::new(entry.file), entry.target, &mut summary);
    }

    info!("🐧 Optimizing penguin animation frames ({FRAME_COUNT} files)...");
    for frame in frame_files() {
        process_entry(assets_root, &frame, FRAME_TARGET, &mut summary);
    }

    summary
}

fn process_entry(assets_root: &Path, relative: &Path, target: TargetSize, summary: &mut BatchSummary) {
    let input = assets_root.join(relative);
    if !utils::file_exists(&input) {
        warn!("⚠ {} not found, skipping", relative.display());
        summary.skipped += 1;
        return;
    }

    // Keep the pristine bytes before the in-place overwrite. A file we
    // could not back up is left untouched.
    if let Err(e) = utils::backup_original(assets_root, relative) {
        error!("✗ Error backing up {}: {}", relative.display(), e);
        summary.failed += 1;
        return;
    }

    match ImageOptimizer::optimize(&input, &input, target) {
        Ok(result) => {
            info!(
                "✓ {}: {}x{} → {}x{} ({:.1}KB → {:.1}KB, {:.1}% saved)",
                relative.display(),
                result.original_width,
                result.original_height,
                result.width,
                result.height,
                result.original_size_kb(),
                result.optimized_size_kb(),
                result.savings_percent
            );
            summary.optimized += 1;
            summary.total_original_bytes += result.original_size;
            summary.total_optimized_bytes += result.optimized_size;
        }
        Err(e) => {
            error!("✗ Error processing {}: {}", input.display(), e);
            summary.failed += 1;
        }
    }
}
