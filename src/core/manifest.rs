//! Static manifests of the game assets to optimize.
//!
//! Two groups exist: the named top-level assets, each with its own target
//! size, and the numbered penguin animation frames, which all share one.

use crate::core::TargetSize;
use std::path::PathBuf;

/// One asset to process: a path relative to the assets root plus the exact
/// dimensions it is resized to.
#[derive(Debug, Clone, Copy)]
pub struct ManifestEntry {
    /// File name relative to the assets root
    pub file: &'static str,
    /// Dimensions to resize to
    pub target: TargetSize,
}

/// Named top-level assets.
pub const MAIN_ASSETS: [ManifestEntry; 4] = [
    ManifestEntry {
        file: "spaceship.png",
        target: TargetSize::new(64, 64),
    },
    ManifestEntry {
        file: "boss.png",
        target: TargetSize::new(128, 128),
    },
    // Keep aspect ratio ~1:2
    ManifestEntry {
        file: "comet.png",
        target: TargetSize::new(64, 128),
    },
    ManifestEntry {
        file: "heart.png",
        target: TargetSize::new(64, 64),
    },
];

/// Subdirectory holding the animation frames.
pub const FRAME_DIR: &str = "penguin";

/// Frames are named `1.png` through `FRAME_COUNT.png`.
pub const FRAME_COUNT: u32 = 9;

/// All animation frames share one target size.
pub const FRAME_TARGET: TargetSize = TargetSize::new(64, 64);

/// Relative paths of the animation frames, in processing order.
pub fn frame_files() -> impl Iterator<Item = PathBuf> {
    (1..=FRAME_COUNT).map(|i| PathBuf::from(FRAME_DIR).join(format!("{i}.png")))
}
