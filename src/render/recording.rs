use crate::foundation::color::Rgba;
use crate::foundation::core::Point;
use crate::render::surface::{DrawCommand, DrawSurface, FillState};

/// A filled circle as observed by a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RecordedFill {
    /// Circle center.
    pub center: Point,
    /// Radius as passed; not clamped.
    pub radius: f64,
    /// Fill color active when the circle was drawn.
    pub color: Rgba,
}

/// [`DrawSurface`] that records every call instead of drawing.
///
/// Used for tracing frames and for asserting on draw sequences in tests.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    fills: Vec<RecordedFill>,
    state: FillState,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Empty recorder with a transparent fill.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            fills: Vec::new(),
            state: FillState::new(Rgba::transparent()),
        }
    }

    /// Every call so far, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every filled circle so far, in order.
    pub fn fill_circles(&self) -> &[RecordedFill] {
        &self.fills
    }

    /// Fill color that the next `fill_circle` would use.
    pub fn current_fill(&self) -> Rgba {
        self.state.current()
    }

    /// Number of saves not yet restored.
    pub fn save_depth(&self) -> usize {
        self.state.depth()
    }

    /// Drain the recorded commands, leaving the surface empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        self.fills.clear();
        self.state.reset(Rgba::transparent());
        std::mem::take(&mut self.commands)
    }

    /// Discard everything recorded.
    pub fn clear(&mut self) {
        self.take();
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.state.save();
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.state.restore();
        self.commands.push(DrawCommand::Restore);
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.state.set(color);
        self.commands.push(DrawCommand::SetFillColor { color });
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.fills.push(RecordedFill {
            center,
            radius,
            color: self.state.current(),
        });
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
