//! User preferences persisted alongside the match.
//!
//! These values never influence scoring. They are stored and handed to the
//! presentation and feedback layers as-is.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named palette color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeonColor {
    /// Display name.
    pub name: &'static str,
    /// `#rrggbb` value.
    pub value: &'static str,
}

/// The selectable text colors.
pub const NEON_COLORS: [NeonColor; 8] = [
    NeonColor { name: "Lima", value: "#bef264" },
    NeonColor { name: "Ciano", value: "#22d3ee" },
    NeonColor { name: "Rosa", value: "#f472b6" },
    NeonColor { name: "Amarelo", value: "#fde047" },
    NeonColor { name: "Roxo", value: "#c084fc" },
    NeonColor { name: "Laranja", value: "#fb923c" },
    NeonColor { name: "Vermelho", value: "#f87171" },
    NeonColor { name: "Branco", value: "#ffffff" },
];

/// Default text color (Lima).
pub const DEFAULT_COLOR: &str = "#bef264";

/// Default UI opacity.
pub const DEFAULT_OPACITY: f32 = 0.9;

/// Lowest UI opacity the slider allows.
pub const MIN_OPACITY: f32 = 0.2;

/// Highest UI opacity.
pub const MAX_OPACITY: f32 = 1.0;

/// Display and feedback preferences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Text color, `#rrggbb`, lower-case.
    pub color: String,

    /// UI opacity in `[0.2, 1.0]`, on a 0.1 grid.
    pub opacity: f32,

    /// Suppress tones and speech.
    pub muted: bool,

    /// Narrator voice name. `None` uses the system default.
    pub voice: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            opacity: DEFAULT_OPACITY,
            muted: false,
            voice: None,
        }
    }
}

impl Preferences {
    /// Set the text color. Accepts `#rrggbb` in either case.
    pub fn set_color(&mut self, color: &str) -> Result<()> {
        self.color = parse_color(color)?;
        Ok(())
    }

    /// Set the UI opacity, clamped to the slider range and snapped to 0.1.
    ///
    /// Returns the value actually stored.
    pub fn set_opacity(&mut self, opacity: f32) -> Result<f32> {
        self.opacity = parse_opacity(opacity)?;
        Ok(self.opacity)
    }

    /// Flip the mute flag and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Select a narrator voice. An empty name selects the system default.
    pub fn set_voice(&mut self, voice: Option<String>) {
        self.voice = voice.filter(|v| !v.trim().is_empty());
    }

    /// Palette entry for the current color, if it is one of the presets.
    #[must_use]
    pub fn palette_entry(&self) -> Option<&'static NeonColor> {
        NEON_COLORS.iter().find(|c| c.value == self.color)
    }
}

/// Validate a `#rrggbb` color and lower-case it.
pub fn parse_color(color: &str) -> Result<String> {
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| Error::InvalidColor(color.to_string()))?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(color.to_string()));
    }
    Ok(format!("#{}", hex.to_ascii_lowercase()))
}

/// Clamp an opacity into range and snap it to the 0.1 grid.
pub fn parse_opacity(opacity: f32) -> Result<f32> {
    if !opacity.is_finite() {
        return Err(Error::InvalidOpacity);
    }
    let clamped = opacity.clamp(MIN_OPACITY, MAX_OPACITY);
    Ok((clamped * 10.0).round() / 10.0)
}
