use std::path::{Path, PathBuf};

use crate::encode::png::save_png;
use crate::foundation::core::{Canvas, FrameIndex, FrameRange};
use crate::foundation::error::{OrbError, OrbResult};
use crate::render::frame::FrameRGBA;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output dimensions in pixels.
    pub canvas: Canvas,
    /// Frames about to be pushed.
    pub range: FrameRange,
}

/// Sink contract for consuming rendered frames in order.
///
/// Ordering contract: `push_frame` is called in strictly increasing [`FrameIndex`] order within
/// the range announced in `begin`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> OrbResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> OrbResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> OrbResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called after the last `begin`.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> OrbResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> OrbResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> OrbResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame as `frame_NNNNNN.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    last: Option<FrameIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir`, created on `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last: None,
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path frame `idx` is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:06}.png", idx.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> OrbResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            OrbError::validation(format!(
                "failed to create output dir '{}': {e}",
                self.dir.display()
            ))
        })?;
        tracing::debug!(dir = %self.dir.display(), frames = cfg.range.len_frames(), "png sequence begin");
        self.last = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> OrbResult<()> {
        if let Some(last) = self.last
            && idx <= last
        {
            return Err(OrbError::validation(format!(
                "frame {} pushed after frame {}",
                idx.0, last.0
            )));
        }
        let path = self.frame_path(idx);
        save_png(&path, frame)?;
        self.last = Some(idx);
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> OrbResult<()> {
        tracing::debug!(written = self.written.len(), "png sequence end");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
