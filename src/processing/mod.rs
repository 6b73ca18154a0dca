mod batch;
mod optimizer;
mod validation;

pub use batch::{BatchSummary, run};
pub use optimizer::ImageOptimizer;
pub use validation::{validate_input_path, validate_target};
