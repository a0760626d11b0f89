//! Rendering configuration.
//!
//! The defaults reproduce the stock deck art. Everything can be overridden
//! from JSON; fields left out keep their default:
//!
//! ```rust
//! use samurai_deck::ArtConfig;
//!
//! let cfg = ArtConfig::from_json(r#"{ "back_title": "DAILY DECK" }"#).unwrap();
//! assert_eq!(cfg.back_title, "DAILY DECK");
//! assert_eq!(cfg.torn_edge.steps, 18);
//! ```

use serde::{Deserialize, Serialize};

use crate::card_art::error::{ArtError, ArtResult};

/// An RGB colour. Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// `rgba(r,g,b,alpha)`, alpha clamped to `0..=1`.
    pub fn rgba(self, alpha: f64) -> String {
        let a = alpha.clamp(0.0, 1.0);
        format!("rgba({},{},{},{})", self.0, self.1, self.2, trim_alpha(a))
    }
}

// Shortest decimal form of an alpha value, at most three places.
fn trim_alpha(a: f64) -> String {
    let s = format!("{a:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() { "0".to_string() } else { s.to_string() }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Top-left stop of the paper gradient.
    pub paper_light: Rgb,
    /// Bottom-right stop of the paper gradient.
    pub paper_dark: Rgb,
    /// Sumi ink: text, icons and fibers.
    pub ink: Rgb,
    /// Vermilion: ink wash, card-back swash and rank medallion.
    pub accent: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            paper_light: Rgb(0xf7, 0xf3, 0xe7),
            paper_dark: Rgb(0xec, 0xe6, 0xd6),
            ink: Rgb(17, 24, 39),
            accent: Rgb(185, 28, 28),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TornEdgeParams {
    /// Segments per side of the card outline.
    pub steps: u32,
    /// Maximum offset of each outline point, in SVG user units.
    pub jitter: f64,
}

impl TornEdgeParams {
    pub const MAX_STEPS: u32 = 64;
    pub const MAX_JITTER: f64 = 8.0;

    pub fn clamped(self) -> Self {
        let jitter = if self.jitter.is_finite() { self.jitter } else { 0.0 };
        TornEdgeParams {
            steps: self.steps.clamp(1, Self::MAX_STEPS),
            jitter: jitter.clamp(0.0, Self::MAX_JITTER),
        }
    }
}

impl Default for TornEdgeParams {
    fn default() -> Self {
        TornEdgeParams { steps: 18, jitter: 2.2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    pub palette: Palette,
    pub font_family: String,
    /// Caption along the bottom of the card back.
    pub back_title: String,
    pub torn_edge: TornEdgeParams,
}

impl Default for ArtConfig {
    fn default() -> Self {
        ArtConfig {
            palette: Palette::default(),
            font_family: "system-ui,Segoe UI,Roboto".to_string(),
            back_title: "SAMURAI DECK".to_string(),
            torn_edge: TornEdgeParams::default(),
        }
    }
}

impl ArtConfig {
    /// Parse a JSON config. Out-of-range numbers are clamped, not rejected.
    pub fn from_json(json: &str) -> ArtResult<Self> {
        let cfg: ArtConfig =
            serde_json::from_str(json).map_err(|e| ArtError::config(e.to_string()))?;
        Ok(cfg.clamped())
    }

    pub fn to_json(&self) -> ArtResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn clamped(mut self) -> Self {
        self.torn_edge = self.torn_edge.clamped();
        self
    }
}
