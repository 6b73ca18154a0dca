use crate::core::TargetSize;
use crate::utils::{OptimizerError, OptimizerResult, PathError};
use std::path::Path;

/// Check that the input path exists and is a regular file.
pub fn validate_input_path(path: &Path) -> OptimizerResult<()> {
    if !path.exists() {
        return Err(PathError::NotFound(path.to_path_buf()).into());
    }
    if !path.is_file() {
        return Err(PathError::NotFile(path.to_path_buf()).into());
    }
    Ok(())
}

/// Check that the target dimensions are usable.
pub fn validate_target(target: TargetSize) -> OptimizerResult<()> {
    if target.width == 0 || target.height == 0 {
        return Err(OptimizerError::processing(format!(
            "Invalid target size: {target}. Width and height must be positive"
        )));
    }
    Ok(())
}
