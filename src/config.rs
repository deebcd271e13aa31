//! Backdrop configuration
//!
//! Every palette and layout constant of the composition, loadable from a
//! JSON file so the artwork can be re-themed without touching code. The
//! defaults reproduce the canonical installer background.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::display::{Rgba, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::Result;

/// Parameters for the generated installer background.
/// All fields default individually, so a config file only needs the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Canvas size in pixels
    pub width: u32,
    pub height: u32,

    /// Vertical gradient endpoints (top and bottom scanline colors)
    pub gradient_top: Rgba,
    pub gradient_bottom: Rgba,

    /// Peak brightness added by the radial highlight
    pub highlight_strength: u8,
    /// How far above the canvas midpoint the highlight centers, in pixels
    pub highlight_lift: i32,

    /// Centers of the icon glow spots (app icon, Applications folder)
    pub icon_centers: Vec<(i32, i32)>,
    /// Glow spot radius in pixels
    pub glow_radius: i32,
    /// Peak brightness added at a glow center
    pub glow_strength: u8,

    pub arrow_color: Rgba,

    pub title: String,
    pub title_scale: u32,
    pub title_y: i32,
    pub title_color: Rgba,

    pub subtitle: String,
    pub subtitle_scale: u32,
    pub subtitle_y: i32,
    pub subtitle_color: Rgba,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gradient_top: Rgba::opaque(24, 24, 32),
            gradient_bottom: Rgba::opaque(38, 38, 52),
            highlight_strength: 18,
            highlight_lift: 20,
            icon_centers: vec![(170, 220), (490, 220)],
            glow_radius: 65,
            glow_strength: 10,
            arrow_color: Rgba::new(140, 140, 180, 200),
            title: "INSTALL KOTO".to_string(),
            title_scale: 3,
            title_y: 50,
            title_color: Rgba::new(220, 220, 240, 230),
            subtitle: "DRAG TO APPLICATIONS".to_string(),
            subtitle_scale: 2,
            subtitle_y: 320,
            subtitle_color: Rgba::new(160, 160, 180, 180),
        }
    }
}

impl BackdropConfig {
    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save the config to a JSON file (pretty-printed, for hand editing)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_canonical_artwork() {
        let config = BackdropConfig::default();
        assert_eq!(config.width, 660);
        assert_eq!(config.height, 400);
        assert_eq!(config.gradient_top, Rgba::opaque(24, 24, 32));
        assert_eq!(config.gradient_bottom, Rgba::opaque(38, 38, 52));
        assert_eq!(config.icon_centers, vec![(170, 220), (490, 220)]);
        assert_eq!(config.glow_radius, 65);
        assert_eq!(config.title, "INSTALL KOTO");
        assert_eq!(config.subtitle, "DRAG TO APPLICATIONS");
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BackdropConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: BackdropConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BackdropConfig =
            serde_json::from_str(r#"{"title": "INSTALL DEMO", "title_scale": 2}"#).unwrap();
        assert_eq!(config.title, "INSTALL DEMO");
        assert_eq!(config.title_scale, 2);
        assert_eq!(config.width, 660);
        assert_eq!(config.subtitle, "DRAG TO APPLICATIONS");
    }
}
