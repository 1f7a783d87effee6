use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{OrbError, OrbResult};
use crate::render::frame::FrameRGBA;

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> OrbResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write a frame as an 8-bit straight-alpha PNG.
pub fn save_png(path: impl AsRef<Path>, frame: &FrameRGBA) -> OrbResult<()> {
    let path = path.as_ref();
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(OrbError::validation(format!(
            "frame data length {} does not match {}x{} RGBA8",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
