use crate::foundation::error::{OrbError, OrbResult};

pub use kurbo::{Point, Rect};

/// Build a target region from an origin and a size.
///
/// Unlike [`Rect::from_origin_size`], negative sizes are kept as-is so degenerate regions
/// reach the renderer unchanged.
pub fn region(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

/// Zero-based frame number; frame `f` is the `(f + 1)`-th render of a fresh renderer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Largest frame index the pipeline will seek to (about 46 hours at 60 fps).
///
/// Seeking steps the phase once per frame, so unbounded indices would never finish.
pub const MAX_FRAME_INDEX: u64 = 10_000_000;

impl FrameIndex {
    /// Reject indices beyond [`MAX_FRAME_INDEX`].
    pub fn check_seekable(self) -> OrbResult<Self> {
        if self.0 > MAX_FRAME_INDEX {
            return Err(OrbError::validation(format!(
                "frame index {} exceeds maximum {MAX_FRAME_INDEX}",
                self.0
            )));
        }
        Ok(self)
    }
}

/// Half-open range of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Validated range; `start` must not exceed `end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> OrbResult<Self> {
        if start.0 > end.0 {
            return Err(OrbError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range `0..count`.
    pub fn first(count: u64) -> Self {
        Self {
            start: FrameIndex(0),
            end: FrameIndex(count),
        }
    }

    /// Number of frames in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Whether the range holds no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Whether `f` lies in `start..end`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Frames in increasing order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The full canvas as a drawing region.
    pub fn rect(self) -> Rect {
        region(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Dimensions as `u16`, which is what the CPU rasterizer accepts.
    pub fn to_u16(self) -> OrbResult<(u16, u16)> {
        if self.width == 0 || self.height == 0 {
            return Err(OrbError::validation("canvas width and height must be > 0"));
        }
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| OrbError::validation("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| OrbError::validation("canvas height exceeds u16"))?;
        Ok((w, h))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// All channels zero.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply a straight-alpha color, rounding to nearest.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: premul_u8(r, a),
            g: premul_u8(g, a),
            b: premul_u8(b, a),
            a,
        }
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Undo premultiplication, rounding to nearest.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let unpremul = |c: u8| -> u8 {
            let a = u32::from(self.a);
            ((u32::from(c) * 255 + a / 2) / a).min(255) as u8
        };
        [unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a]
    }
}

fn premul_u8(c: u8, a: u8) -> u8 {
    let c = u16::from(c);
    let a = u16::from(a);
    (((c * a) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
