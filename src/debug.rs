use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbImage;
use time::OffsetDateTime;
use time::format_description;

/// Environment toggle for debug-image persistence
pub const DEBUG_ENV_VAR: &str = "DOCFORENSICS_DEBUG";

/// Default directory for persisted debug artifacts
pub const DEFAULT_DEBUG_DIR: &str = "uploads/debug";

/// Whether the environment requests debug-image persistence
pub fn debug_enabled() -> bool {
    std::env::var(DEBUG_ENV_VAR)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Persist an annotated analysis image to the debug directory, timestamped.
///
/// This is an optional side effect of the shell; the file is never part of
/// any response.
pub fn persist_annotated(image: &RgbImage, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create debug directory {}", dir.display()))?;

    let format = format_description::parse("[year][month][day][hour][minute][second]")?;
    let timestamp = OffsetDateTime::now_utc().format(&format)?;

    let path = dir.join(format!("analysis_{timestamp}.jpg"));
    image
        .save(&path)
        .with_context(|| format!("failed to save debug image {}", path.display()))?;

    Ok(path)
}
