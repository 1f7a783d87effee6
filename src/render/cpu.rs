use vello_cpu::kurbo::Shape as _;

use crate::foundation::color::Rgba;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{OrbError, OrbResult};
use crate::render::frame::FrameRGBA;
use crate::render::surface::{DrawSurface, FillState};

/// Options for [`CpuSurface`].
#[derive(Debug, Clone, Copy)]
pub struct CpuSurfaceOpts {
    /// If set, each frame starts cleared to this straight-alpha RGBA8 color.
    pub clear_rgba: Option<[u8; 4]>,
    /// Flattening tolerance in pixels when converting circles to paths.
    pub tolerance: f64,
}

impl Default for CpuSurfaceOpts {
    fn default() -> Self {
        Self {
            clear_rgba: None,
            tolerance: 0.1,
        }
    }
}

impl CpuSurfaceOpts {
    /// Return options with a configured clear color.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }
}

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls accumulate in a render context; [`CpuSurface::finish`] rasterizes them into a
/// premultiplied [`FrameRGBA`] and starts the next frame.
pub struct CpuSurface {
    canvas: Canvas,
    width: u16,
    height: u16,
    opts: CpuSurfaceOpts,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    state: FillState,
    fills: u64,
}

impl CpuSurface {
    /// Surface for `canvas`; both dimensions must be in `1..=u16::MAX`.
    pub fn new(canvas: Canvas, opts: CpuSurfaceOpts) -> OrbResult<Self> {
        let (width, height) = canvas.to_u16()?;
        if !(opts.tolerance.is_finite() && opts.tolerance > 0.0) {
            return Err(OrbError::validation("tolerance must be finite and > 0"));
        }

        let mut surface = Self {
            canvas,
            width,
            height,
            opts,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            state: FillState::new(Rgba::transparent()),
            fills: 0,
        };
        surface.begin_frame();
        Ok(surface)
    }

    /// Output dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Circles actually rasterized since the last [`CpuSurface::finish`].
    pub fn fill_count(&self) -> u64 {
        self.fills
    }

    /// Rasterize everything drawn since the previous call and read the pixels back.
    pub fn finish(&mut self) -> OrbResult<FrameRGBA> {
        if self.state.depth() != 0 {
            tracing::warn!(depth = self.state.depth(), "frame finished with unrestored saves");
        }

        self.ctx.flush();
        clear_pixmap(&mut self.pixmap, [0, 0, 0, 0]);
        self.ctx.render_to_pixmap(&mut self.pixmap);

        let data = self.pixmap.data_as_u8_slice().to_vec();
        let expected = usize::from(self.width) * usize::from(self.height) * 4;
        if data.len() != expected {
            return Err(OrbError::render(format!(
                "pixmap readback length {} != expected {expected}",
                data.len()
            )));
        }
        tracing::debug!(fills = self.fills, "cpu frame finished");

        self.begin_frame();
        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
            premultiplied: true,
        })
    }

    fn begin_frame(&mut self) {
        self.ctx.reset();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.state.reset(Rgba::transparent());
        self.fills = 0;

        if let Some([r, g, b, a]) = self.opts.clear_rgba {
            self.ctx
                .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }
    }
}

impl DrawSurface for CpuSurface {
    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.state.set(color);
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        if !(radius.is_finite() && radius > 0.0 && center.is_finite()) {
            return;
        }
        let [r, g, b, a] = self.state.current().to_rgba8();
        if a == 0 {
            return;
        }

        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        let circle =
            vello_cpu::kurbo::Circle::new(vello_cpu::kurbo::Point::new(center.x, center.y), radius);
        self.ctx.fill_path(&circle.to_path(self.opts.tolerance));
        self.fills += 1;
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
