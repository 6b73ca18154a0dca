//! Core types and the asset manifests.
//!
//! This module contains the fundamental types used throughout the program:
//! - [`ManifestEntry`]: one asset to process and its target dimensions
//! - [`TargetSize`]: exact pixel dimensions to resize to
//! - [`OptimizationResult`]: result of optimizing one asset

mod manifest;
mod types;

pub use manifest::{FRAME_COUNT, FRAME_DIR, FRAME_TARGET, MAIN_ASSETS, ManifestEntry, frame_files};
pub use types::{OptimizationResult, TargetSize};
