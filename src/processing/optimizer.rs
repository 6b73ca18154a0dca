//! Resize-and-save for a single asset.
//!
//! Decodes the input, resizes it to the exact target dimensions with Lanczos
//! resampling, and re-encodes it as PNG with the best compression level. The
//! decoded color type is carried through unchanged, so alpha survives.

use crate::core::{OptimizationResult, TargetSize};
use crate::processing::validation;
use crate::utils::{self, OptimizerError, OptimizerResult};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageEncoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub struct ImageOptimizer;

impl ImageOptimizer {
    /// Resize `input` to `target` and write the result to `output` as PNG.
    ///
    /// `output` may equal `input`, in which case the original is overwritten
    /// in place. The encode goes to a `.tmp` sibling first and is renamed
    /// over `output` only once it succeeded, so a failed encode never
    /// truncates the original.
    pub fn optimize(
        input: &Path,
        output: &Path,
        target: TargetSize,
    ) -> OptimizerResult<OptimizationResult> {
        validation::validate_input_path(input)?;
        validation::validate_target(target)?;

        let original_size = utils::file_size(input)?;
        if original_size == 0 {
            return Err(OptimizerError::processing(format!(
                "Empty file: {}",
                input.display()
            )));
        }

        let img = image::open(input)
            .map_err(|e| OptimizerError::decode(format!("{}: {}", input.display(), e)))?;
        let (original_width, original_height) = img.dimensions();

        let resized = img.resize_exact(target.width, target.height, FilterType::Lanczos3);

        let tmp = tmp_path(output);
        if let Err(e) = write_png(&resized, &tmp) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e);
        }
        std::fs::rename(&tmp, output)?;

        let optimized_size = utils::file_size(output)?;
        let saved_bytes = original_size as i64 - optimized_size as i64;

        Ok(OptimizationResult {
            path: output.display().to_string(),
            original_width,
            original_height,
            width: target.width,
            height: target.height,
            original_size,
            optimized_size,
            saved_bytes,
            savings_percent: saved_bytes as f64 / original_size as f64 * 100.0,
        })
    }
}

/// Sibling path the encode goes to before the rename over the output.
fn tmp_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_png(image: &DynamicImage, path: &Path) -> OptimizerResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilter::Adaptive);
    encoder
        .write_image(image.as_bytes(), image.width(), image.height(), image.color())
        .map_err(|e| OptimizerError::processing(format!("PNG encode failed: {e}")))
}
