use crate::foundation::color::Rgba;
use crate::foundation::core::Point;

/// Immediate-mode drawing capability the orb paints into.
///
/// Implementations keep a fill-color state that `save`/`restore` push and pop. The orb never
/// fails, so neither does the surface: backends that can fail defer errors to their own
/// readback step (see [`crate::CpuSurface::finish`]).
pub trait DrawSurface {
    /// Push the current drawing state.
    fn save(&mut self);

    /// Pop the most recently saved drawing state. Unbalanced calls are ignored.
    fn restore(&mut self);

    /// Set the color used by subsequent fills.
    fn set_fill_color(&mut self, color: Rgba);

    /// Fill a circle with the current fill color.
    fn fill_circle(&mut self, center: Point, radius: f64);
}

/// One recorded [`DrawSurface`] call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// [`DrawSurface::save`].
    Save,
    /// [`DrawSurface::restore`].
    Restore,
    /// [`DrawSurface::set_fill_color`].
    SetFillColor {
        /// New fill color.
        color: Rgba,
    },
    /// [`DrawSurface::fill_circle`].
    FillCircle {
        /// Circle center.
        center: Point,
        /// Radius as passed.
        radius: f64,
    },
}

/// Fill-color state with a save stack, shared by the bundled surfaces.
#[derive(Clone, Debug)]
pub(crate) struct FillState {
    current: Rgba,
    saved: Vec<Rgba>,
}

impl FillState {
    pub(crate) fn new(initial: Rgba) -> Self {
        Self {
            current: initial,
            saved: Vec::new(),
        }
    }

    pub(crate) fn current(&self) -> Rgba {
        self.current
    }

    pub(crate) fn set(&mut self, color: Rgba) {
        self.current = color;
    }

    pub(crate) fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub(crate) fn restore(&mut self) {
        match self.saved.pop() {
            Some(c) => self.current = c,
            None => tracing::warn!("restore without matching save; ignored"),
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.saved.len()
    }

    pub(crate) fn reset(&mut self, initial: Rgba) {
        self.current = initial;
        self.saved.clear();
    }
}
