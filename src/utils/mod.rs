pub mod error;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult, PathError};
pub use fs::{backup_original, file_exists, file_size};
