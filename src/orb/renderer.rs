use std::f64::consts::TAU;

use crate::foundation::color::Rgba;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::OrbResult;
use crate::orb::params::OrbParams;
use crate::render::surface::DrawSurface;

/// Normalized index of circle `index` out of `count`: `index / count`.
pub fn circle_progress(index: u32, count: u32) -> f64 {
    f64::from(index) / f64::from(count)
}

/// Fill opacity at a given progress: `(1 - progress) * max_opacity`.
pub fn circle_opacity(progress: f64, max_opacity: f64) -> f64 {
    (1.0 - progress) * max_opacity
}

/// Per-channel linear interpolation between the start and end colors.
///
/// Bit-identical to `start + (end - start) * t` at `t = 0` and `t = 1`; elsewhere within one ulp.
pub fn lerp_rgba(start: Rgba, end: Rgba, t: f64) -> Rgba {
    start.lerp(end, t)
}

/// Draw parameters for a single circle of the orb.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CircleSpec {
    /// Circle index; `0` is innermost.
    pub index: u32,
    /// `index / circle_count`.
    pub progress: f64,
    /// Center of the target region.
    pub center: Point,
    /// Diameter before halving; may be zero or negative for degenerate regions.
    pub size: f64,
    /// `size / 2`.
    pub radius: f64,
    /// Interpolation factor between start and end colors, clamped to `[0, 1]`.
    pub color_progress: f64,
    /// `(1 - progress) * max_opacity`.
    pub opacity: f64,
    /// Interpolated color with alpha replaced by `opacity`.
    pub color: Rgba,
}

/// Quantities shared by every circle of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbFrame {
    /// Animation phase the frame is computed at.
    pub phase: f64,
    /// `sin(2 * phase) * pulse_amplitude`.
    pub pulse: f64,
    /// `sin(phase) * color_shift_amplitude`.
    pub color_shift: f64,
    /// `min(width, height) * size_fraction`.
    pub base_size: f64,
    /// Center of the target region; shared by every circle.
    pub center: Point,
    /// Color at progress 0: boosted luminosity, full alpha.
    pub start_color: Rgba,
    /// Color at progress 1: the base color.
    pub end_color: Rgba,
    params: OrbParams,
}

impl OrbFrame {
    /// Number of circles in the frame.
    pub fn circle_count(&self) -> u32 {
        self.params.circle_count
    }

    /// Draw parameters of circle `index`.
    pub fn circle(&self, index: u32) -> CircleSpec {
        let p = &self.params;
        let progress = circle_progress(index, p.circle_count);
        let size = self.base_size * (p.min_scale + progress * p.scale_range + self.pulse);
        // Never exceeds 1 with the default amplitudes; kept for custom params.
        let color_progress = (progress + self.color_shift).clamp(0.0, 1.0);
        let opacity = circle_opacity(progress, p.max_opacity);
        let color = lerp_rgba(self.start_color, self.end_color, color_progress).with_alpha(opacity);

        CircleSpec {
            index,
            progress,
            center: self.center,
            size,
            radius: size / 2.0,
            color_progress,
            opacity,
            color,
        }
    }

    /// Circles in paint order: outermost (`count - 1`) down to innermost (`0`).
    pub fn circles(self) -> impl Iterator<Item = CircleSpec> {
        (0..self.params.circle_count)
            .rev()
            .map(move |i| self.circle(i))
    }
}

/// Animated glow: concentric, alpha-blended circles whose size and color oscillate with an
/// internal phase that advances once per [`OrbRenderer::render`].
#[derive(Clone, Debug)]
pub struct OrbRenderer {
    base_color: Rgba,
    start_color: Rgba,
    params: OrbParams,
    phase: f64,
}

impl OrbRenderer {
    /// Renderer with the canonical parameters. Any color is accepted, including fully
    /// transparent ones.
    pub fn new(base_color: Rgba) -> Self {
        Self::from_parts(base_color, OrbParams::default())
    }

    /// Renderer with custom parameters, validated first.
    pub fn with_params(base_color: Rgba, params: OrbParams) -> OrbResult<Self> {
        params.validate()?;
        Ok(Self::from_parts(base_color, params))
    }

    fn from_parts(base_color: Rgba, params: OrbParams) -> Self {
        let boosted = (base_color.luminosity() + params.luminosity_boost).min(1.0);
        Self {
            base_color,
            start_color: base_color.with_luminosity(boosted).with_alpha(1.0),
            params,
            phase: 0.0,
        }
    }

    /// Color given at construction.
    pub fn base_color(&self) -> Rgba {
        self.base_color
    }

    /// Base color at boosted luminosity and full alpha; the color of progress 0.
    pub fn start_color(&self) -> Rgba {
        self.start_color
    }

    /// Effect parameters.
    pub fn params(&self) -> &OrbParams {
        &self.params
    }

    /// Current animation phase, always in `[0, 2*pi)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Step the phase by one frame without drawing.
    pub fn advance(&mut self) {
        let mut next = self.phase + self.params.animation_speed;
        // Subtract rather than reset so the oscillation stays continuous.
        while next >= TAU {
            next -= TAU;
        }
        self.phase = next;
    }

    /// Step the phase `frames` times.
    ///
    /// Runs one step per frame so the result matches repeated renders bit for bit; cost is
    /// linear in `frames`.
    pub fn advance_by(&mut self, frames: u64) {
        for _ in 0..frames {
            self.advance();
        }
    }

    /// Per-frame quantities for `region` at the current phase.
    pub fn frame(&self, region: Rect) -> OrbFrame {
        let p = &self.params;
        OrbFrame {
            phase: self.phase,
            pulse: (2.0 * self.phase).sin() * p.pulse_amplitude,
            color_shift: self.phase.sin() * p.color_shift_amplitude,
            base_size: region.width().min(region.height()) * p.size_fraction,
            center: region.center(),
            start_color: self.start_color,
            end_color: self.base_color,
            params: self.params,
        }
    }

    /// Circles for `region` at the current phase, in paint order. Does not advance.
    pub fn circles(&self, region: Rect) -> impl Iterator<Item = CircleSpec> + use<> {
        self.frame(region).circles()
    }

    /// Advance the phase, then paint every circle into `surface`.
    ///
    /// The surface state is saved before the first circle and restored after the last.
    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, region: Rect) {
        self.advance();
        tracing::trace!(phase = self.phase, "render orb");

        surface.save();
        for circle in self.circles(region) {
            surface.set_fill_color(circle.color);
            surface.fill_circle(circle.center, circle.radius);
        }
        surface.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/orb/renderer.rs"]
mod tests;
