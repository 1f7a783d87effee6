use crate::foundation::error::{OrbError, OrbResult};

/// Numeric constants of the glow effect.
///
/// [`OrbParams::default`] reproduces the canonical orb; scenes may override individual fields.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbParams {
    /// Number of concentric circles painted per frame.
    pub circle_count: u32,
    /// Radians added to the animation phase on every render.
    pub animation_speed: f64,
    /// Fraction of `min(width, height)` used as the base diameter.
    pub size_fraction: f64,
    /// Diameter scale of the innermost circle (`progress = 0`), before the pulse.
    pub min_scale: f64,
    /// Additional diameter scale per unit of progress.
    pub scale_range: f64,
    /// Amplitude of the `sin(2 * phase)` size pulse.
    pub pulse_amplitude: f64,
    /// Amplitude of the `sin(phase)` shift applied to color progress.
    pub color_shift_amplitude: f64,
    /// Luminosity added to the base color to form the inner (start) color.
    pub luminosity_boost: f64,
    /// Opacity of the innermost circle; falls off linearly with progress.
    pub max_opacity: f64,
}

impl Default for OrbParams {
    fn default() -> Self {
        Self {
            circle_count: 15,
            animation_speed: 0.015,
            size_fraction: 0.9,
            min_scale: 0.3,
            scale_range: 0.7,
            pulse_amplitude: 0.1,
            color_shift_amplitude: 0.05,
            luminosity_boost: 0.2,
            max_opacity: 0.7,
        }
    }
}

impl OrbParams {
    /// Reject values that would break the phase invariant or produce non-finite geometry.
    pub fn validate(&self) -> OrbResult<()> {
        if self.circle_count == 0 {
            return Err(OrbError::validation("circle_count must be > 0"));
        }

        let fields = [
            ("animation_speed", self.animation_speed),
            ("size_fraction", self.size_fraction),
            ("min_scale", self.min_scale),
            ("scale_range", self.scale_range),
            ("pulse_amplitude", self.pulse_amplitude),
            ("color_shift_amplitude", self.color_shift_amplitude),
            ("luminosity_boost", self.luminosity_boost),
            ("max_opacity", self.max_opacity),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(OrbError::validation(format!("{name} must be finite")));
            }
        }

        if !(0.0..std::f64::consts::TAU).contains(&self.animation_speed) {
            return Err(OrbError::validation(
                "animation_speed must be in [0, 2*pi) radians per frame",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/orb/params.rs"]
mod tests;
