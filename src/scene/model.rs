use std::path::Path;

use crate::foundation::color::Rgba;
use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::{OrbError, OrbResult};
use crate::orb::params::OrbParams;
use crate::orb::renderer::OrbRenderer;
use crate::render::cpu::CpuSurfaceOpts;

/// Declarative description of an orb render, loadable from JSON.
///
/// ```json
/// {
///   "canvas": { "width": 256, "height": 256 },
///   "color": "#3399ff",
///   "background": "#000000",
///   "params": { "circle_count": 15 }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrbScene {
    /// Output size; the orb fills the whole canvas.
    pub canvas: Canvas,
    /// Base color of the orb.
    pub color: Rgba,
    /// Clear color; transparent when absent.
    #[serde(default)]
    pub background: Option<Rgba>,
    /// Effect parameters; omitted fields keep their defaults.
    #[serde(default)]
    pub params: OrbParams,
}

impl OrbScene {
    /// Scene with no background and default parameters.
    pub fn new(canvas: Canvas, color: Rgba) -> Self {
        Self {
            canvas,
            color,
            background: None,
            params: OrbParams::default(),
        }
    }

    /// Parse and validate a JSON scene.
    pub fn from_json_str(s: &str) -> OrbResult<Self> {
        let scene: Self = serde_json::from_str(s).map_err(|e| OrbError::serde(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Read, parse and validate a JSON scene file.
    pub fn from_path(path: impl AsRef<Path>) -> OrbResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            OrbError::validation(format!("failed to read scene '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> OrbResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| OrbError::serde(e.to_string()))
    }

    /// Check canvas bounds and parameters.
    pub fn validate(&self) -> OrbResult<()> {
        self.canvas.to_u16()?;
        self.params.validate()
    }

    /// The full canvas; the orb is centered in it.
    pub fn region(&self) -> Rect {
        self.canvas.rect()
    }

    /// Fresh renderer at phase 0.
    pub fn renderer(&self) -> OrbResult<OrbRenderer> {
        OrbRenderer::with_params(self.color, self.params)
    }

    /// CPU surface options carrying the background.
    pub fn surface_opts(&self) -> CpuSurfaceOpts {
        CpuSurfaceOpts::default().with_clear_rgba(self.background.map(Rgba::to_rgba8))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
