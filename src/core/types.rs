//! Core types for asset optimization results.

use serde::Serialize;
use std::fmt;

/// Exact pixel dimensions an asset is resized to.
///
/// Aspect ratio of the source is ignored; the manifest author picks
/// dimensions that look acceptable for the asset in question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetSize {
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Result of optimizing a single asset.
///
/// Contains the before/after dimensions and file sizes along with the
/// computed savings.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// Path of the optimized file (input and output are the same path)
    pub path: String,
    /// Width of the image before resizing
    #[serde(rename = "originalWidth")]
    pub original_width: u32,
    /// Height of the image before resizing
    #[serde(rename = "originalHeight")]
    pub original_height: u32,
    /// Width after resizing
    pub width: u32,
    /// Height after resizing
    pub height: u32,
    /// Original file size in bytes
    #[serde(rename = "originalSize")]
    pub original_size: u64,
    /// Optimized file size in bytes
    #[serde(rename = "optimizedSize")]
    pub optimized_size: u64,
    /// Bytes saved (can be negative if the file grew)
    #[serde(rename = "savedBytes")]
    pub saved_bytes: i64,
    /// Size reduction as a percentage of the original size
    #[serde(rename = "savingsPercent")]
    pub savings_percent: f64,
}

impl OptimizationResult {
    /// Original file size in kilobytes, for display.
    pub fn original_size_kb(&self) -> f64 {
        self.original_size as f64 / 1024.0
    }

    /// Optimized file size in kilobytes, for display.
    pub fn optimized_size_kb(&self) -> f64 {
        self.optimized_size as f64 / 1024.0
    }
}
