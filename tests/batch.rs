//! End-to-end batch runs against a scratch assets tree.

use asset_optimizer::processing;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};
use std::fs;
use std::path::{Path, PathBuf};

fn scratch_assets(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "asset-optimizer-batch-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("penguin")).unwrap();
    dir
}

fn write_png(path: &Path, width: u32, height: u32) {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let alpha = if x < width / 8 && y < height / 8 { 0 } else { 255 };
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, alpha])
    });
    DynamicImage::ImageRgba8(img).save(path).unwrap();
}

/// Lay out all thirteen manifest files with oversized dimensions.
fn populate_full_tree(root: &Path) {
    for name in ["spaceship.png", "boss.png", "comet.png", "heart.png"] {
        write_png(&root.join(name), 512, 512);
    }
    for i in 1..=9 {
        write_png(&root.join(format!("penguin/{i}.png")), 256, 256);
    }
}

fn dimensions_of(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().dimensions()
}

#[test]
fn full_tree_is_resized_to_manifest_targets() {
    let root = scratch_assets("full");
    populate_full_tree(&root);

    let summary = processing::run(&root);
    assert_eq!(summary.optimized, 13);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);

    assert_eq!(dimensions_of(&root.join("spaceship.png")), (64, 64));
    assert_eq!(dimensions_of(&root.join("boss.png")), (128, 128));
    assert_eq!(dimensions_of(&root.join("comet.png")), (64, 128));
    assert_eq!(dimensions_of(&root.join("heart.png")), (64, 64));
    for i in 1..=9 {
        assert_eq!(dimensions_of(&root.join(format!("penguin/{i}.png"))), (64, 64));
    }

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn run_backs_up_originals_before_overwriting() {
    let root = scratch_assets("backup");
    populate_full_tree(&root);
    let pristine = fs::read(root.join("spaceship.png")).unwrap();

    processing::run(&root);

    assert_eq!(fs::read(root.join("originals/spaceship.png")).unwrap(), pristine);
    assert!(root.join("originals/penguin/9.png").is_file());

    // A second run must not replace the backups with optimized copies.
    processing::run(&root);
    assert_eq!(fs::read(root.join("originals/spaceship.png")).unwrap(), pristine);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn missing_asset_is_skipped_and_the_rest_still_process() {
    let root = scratch_assets("missing");
    populate_full_tree(&root);
    fs::remove_file(root.join("boss.png")).unwrap();

    let summary = processing::run(&root);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.optimized, 12);
    assert_eq!(summary.failed, 0);
    assert!(!root.join("boss.png").exists());
    assert_eq!(dimensions_of(&root.join("heart.png")), (64, 64));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn corrupt_frame_fails_alone() {
    let root = scratch_assets("corrupt");
    populate_full_tree(&root);
    fs::write(root.join("penguin/5.png"), b"garbage, not a png").unwrap();

    let summary = processing::run(&root);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.optimized, 12);

    for i in (1..=9).filter(|i| *i != 5) {
        assert_eq!(dimensions_of(&root.join(format!("penguin/{i}.png"))), (64, 64));
    }
    assert_eq!(
        fs::read(root.join("penguin/5.png")).unwrap(),
        b"garbage, not a png"
    );

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn second_run_is_dimensionally_a_noop() {
    let root = scratch_assets("idempotent");
    populate_full_tree(&root);

    processing::run(&root);
    let first_pass_size = fs::metadata(root.join("spaceship.png")).unwrap().len();

    let summary = processing::run(&root);
    assert_eq!(summary.optimized, 13);
    assert_eq!(dimensions_of(&root.join("spaceship.png")), (64, 64));

    // Re-encoding an already-optimized file lands near the same size.
    let second_pass_size = fs::metadata(root.join("spaceship.png")).unwrap().len();
    let drift = (first_pass_size as f64 - second_pass_size as f64).abs();
    let relative_drift = drift / first_pass_size as f64;
    assert!(relative_drift < 0.25);

    let _ = fs::remove_dir_all(&root);
}
