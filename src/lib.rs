// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod report;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{ManifestEntry, OptimizationResult, TargetSize};
pub use crate::processing::{BatchSummary, ImageOptimizer, run};
pub use crate::report::PerformanceReport;
pub use crate::utils::{OptimizerError, OptimizerResult};

// This library file is the public API for consuming this crate as a library.
// The actual CLI entry point is in main.rs.
