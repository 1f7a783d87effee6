//! orbglow renders an animated "glowing orb": a stack of concentric, alpha-blended circles whose
//! size and color oscillate with a per-instance animation phase.
//!
//! # Pipeline overview
//!
//! 1. **Animate**: [`OrbRenderer::render`] advances the phase by one step (wrapping at `2π`).
//! 2. **Describe**: the renderer computes one [`CircleSpec`] per circle, outermost first.
//! 3. **Draw**: each circle is painted through the [`DrawSurface`] capability
//!    (`save`, `set_fill_color`, `fill_circle`, `restore`).
//! 4. **Read back** (optional): [`CpuSurface`] rasterizes with `vello_cpu` into a premultiplied
//!    [`FrameRGBA`], which [`save_png`] or a [`FrameSink`] can write out.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical renderers stepped identically issue bit-identical draw calls.
//! - **Infallible core**: rendering never fails; errors only come from setup and IO.
//!
//! ```
//! use orbglow::{OrbRenderer, RecordingSurface, Rgba, region};
//!
//! let mut orb = OrbRenderer::new(Rgba::rgb(1.0, 0.0, 0.0));
//! let mut surface = RecordingSurface::new();
//! orb.render(&mut surface, region(0.0, 0.0, 200.0, 200.0));
//! assert_eq!(surface.fill_circles().len(), 15);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod encode;
mod foundation;
mod orb;
mod render;
mod scene;

pub use encode::png::{ensure_parent_dir, save_png};
pub use encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use foundation::color::{Hsl, Rgba};
pub use foundation::core::{
    Canvas, FrameIndex, FrameRange, MAX_FRAME_INDEX, Point, Rect, Rgba8Premul, region,
};
pub use foundation::error::{OrbError, OrbResult};
pub use orb::params::OrbParams;
pub use orb::renderer::{
    CircleSpec, OrbFrame, OrbRenderer, circle_opacity, circle_progress, lerp_rgba,
};
pub use render::cpu::{CpuSurface, CpuSurfaceOpts};
pub use render::frame::FrameRGBA;
pub use render::pipeline::{RenderStats, render_frame, render_range, trace_frame};
pub use render::recording::{RecordedFill, RecordingSurface};
pub use render::surface::{DrawCommand, DrawSurface};
pub use scene::model::OrbScene;
