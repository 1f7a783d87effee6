use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::OrbResult;
use crate::render::cpu::CpuSurface;
use crate::render::frame::FrameRGBA;
use crate::render::recording::RecordingSurface;
use crate::render::surface::DrawCommand;
use crate::scene::model::OrbScene;

/// Summary of a range render.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Circles rasterized across all frames.
    pub circles: u64,
    /// Phase after the last rendered frame.
    pub final_phase: f64,
}

/// Render one frame of `scene`.
///
/// Frame `f` is the `(f + 1)`-th render call on a fresh renderer, so frame 0 is drawn at phase
/// `animation_speed`.
#[tracing::instrument(skip(scene))]
pub fn render_frame(scene: &OrbScene, frame: FrameIndex) -> OrbResult<FrameRGBA> {
    frame.check_seekable()?;
    let mut renderer = scene.renderer()?;
    let mut surface = CpuSurface::new(scene.canvas, scene.surface_opts())?;
    renderer.advance_by(frame.0);
    renderer.render(&mut surface, scene.region());
    surface.finish()
}

/// Render every frame in `range` into `sink`, in order.
///
/// The renderer is fast-forwarded to `range.start` without drawing. An empty range still calls
/// `begin` and `end` on the sink.
#[tracing::instrument(skip(scene, sink))]
pub fn render_range(
    scene: &OrbScene,
    range: FrameRange,
    sink: &mut dyn FrameSink,
) -> OrbResult<RenderStats> {
    range.start.check_seekable()?;
    if !range.is_empty() {
        FrameIndex(range.end.0 - 1).check_seekable()?;
    }
    let mut renderer = scene.renderer()?;
    let mut surface = CpuSurface::new(scene.canvas, scene.surface_opts())?;
    let region = scene.region();

    sink.begin(SinkConfig {
        canvas: scene.canvas,
        range,
    })?;

    renderer.advance_by(range.start.0);
    let mut stats = RenderStats {
        final_phase: renderer.phase(),
        ..RenderStats::default()
    };
    for idx in range.iter() {
        renderer.render(&mut surface, region);
        stats.circles += surface.fill_count();
        let frame = surface.finish()?;
        sink.push_frame(idx, &frame)?;
        stats.frames += 1;
        stats.final_phase = renderer.phase();
    }

    sink.end()?;
    tracing::debug!(frames = stats.frames, circles = stats.circles, "range rendered");
    Ok(stats)
}

/// Draw calls issued for one frame of `scene`, recorded instead of rasterized.
#[tracing::instrument(skip(scene))]
pub fn trace_frame(scene: &OrbScene, frame: FrameIndex) -> OrbResult<Vec<DrawCommand>> {
    frame.check_seekable()?;
    let mut renderer = scene.renderer()?;
    let mut surface = RecordingSurface::new();
    renderer.advance_by(frame.0);
    renderer.render(&mut surface, scene.region());
    Ok(surface.take())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
