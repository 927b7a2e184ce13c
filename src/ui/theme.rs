//! Theme system for quickcard
//!
//! Provides:
//! - Light/dark appearance signal
//! - Theme struct with all card colors
//! - Built-in presets (light, darkwall, catppuccin, nord, gruvbox)
//! - Hex color parsing

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    pub fn is_light(self) -> bool {
        matches!(self, Appearance::Light)
    }

    pub fn flipped(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }
}

/// Theme colors for the card and the demo screen behind it
#[derive(Debug, Clone)]
pub struct Theme {
    /// Light or dark; drives shadow, dimming and glyph color
    pub appearance: Appearance,
    /// Screen background behind the card
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Accent color (borders, highlights)
    pub accent: Color,
    /// Dimmed text (hints, secondary info)
    pub dimmed: Color,
    /// Card fill when the card dims the screen in light appearance
    pub card_surface: Color,
    /// Card fill otherwise (neutral system gray)
    pub card_surface_muted: Color,
    /// Card border
    pub card_border: Color,
    /// Drop shadow (light appearance only)
    pub shadow: Color,
    /// Dimming overlay tint
    pub overlay_dim: Color,
    /// Dismiss badge background
    pub glyph_badge: Color,
    /// Dismiss cross color
    pub glyph_cross: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::darkwall()
    }
}

impl Theme {
    /// Light theme with white cards on gray dimming
    pub fn light() -> Self {
        Self {
            appearance: Appearance::Light,
            background: Color::Rgb(239, 241, 245),        // #eff1f5
            foreground: Color::Rgb(76, 79, 105),          // #4c4f69
            accent: Color::Rgb(30, 102, 245),             // #1e66f5
            dimmed: Color::Rgb(108, 111, 133),            // #6c6f85
            card_surface: Color::Rgb(255, 255, 255),      // #ffffff
            card_surface_muted: Color::Rgb(242, 242, 247), // #f2f2f7 (systemGray6)
            card_border: Color::Rgb(204, 208, 218),       // #ccd0da
            shadow: Color::Rgb(172, 176, 190),            // #acb0be
            overlay_dim: Color::Rgb(128, 128, 128),       // #808080
            glyph_badge: Color::Rgb(229, 229, 234),       // #e5e5ea
            glyph_cross: Color::Rgb(0, 0, 0),             // #000000
        }
    }

    /// Darkwall theme - default
    pub fn darkwall() -> Self {
        Self {
            appearance: Appearance::Dark,
            background: Color::Rgb(13, 17, 22),           // #0d1116
            foreground: Color::Rgb(229, 234, 241),        // #e5eaf1
            accent: Color::Rgb(180, 83, 9),               // #b45309 (amber)
            dimmed: Color::Rgb(156, 163, 175),            // #9ca3af
            card_surface: Color::Rgb(20, 28, 42),         // #141c2a
            card_surface_muted: Color::Rgb(28, 28, 30),   // #1c1c1e (systemGray6)
            card_border: Color::Rgb(107, 114, 128),       // #6b7280
            shadow: Color::Rgb(0, 0, 0),                  // #000000
            overlay_dim: Color::Rgb(128, 128, 128),       // #808080
            glyph_badge: Color::Rgb(44, 44, 46),          // #2c2c2e
            glyph_cross: Color::Rgb(255, 255, 255),       // #ffffff
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            appearance: Appearance::Dark,
            background: Color::Rgb(30, 30, 46),           // #1e1e2e (base)
            foreground: Color::Rgb(205, 214, 244),        // #cdd6f4 (text)
            accent: Color::Rgb(137, 180, 250),            // #89b4fa (blue)
            dimmed: Color::Rgb(166, 173, 200),            // #a6adc8 (subtext0)
            card_surface: Color::Rgb(49, 50, 68),         // #313244 (surface0)
            card_surface_muted: Color::Rgb(49, 50, 68),   // #313244 (surface0)
            card_border: Color::Rgb(147, 153, 178),       // #9399b2 (overlay2)
            shadow: Color::Rgb(17, 17, 27),               // #11111b (crust)
            overlay_dim: Color::Rgb(108, 112, 134),       // #6c7086 (overlay0)
            glyph_badge: Color::Rgb(69, 71, 90),          // #45475a (surface1)
            glyph_cross: Color::Rgb(255, 255, 255),       // #ffffff
        }
    }

    /// Catppuccin Latte theme (light)
    pub fn catppuccin_latte() -> Self {
        Self {
            appearance: Appearance::Light,
            background: Color::Rgb(239, 241, 245),        // #eff1f5 (base)
            foreground: Color::Rgb(76, 79, 105),          // #4c4f69 (text)
            accent: Color::Rgb(30, 102, 245),             // #1e66f5 (blue)
            dimmed: Color::Rgb(108, 111, 133),            // #6c6f85 (subtext0)
            card_surface: Color::Rgb(255, 255, 255),      // #ffffff
            card_surface_muted: Color::Rgb(230, 233, 239), // #e6e9ef (mantle)
            card_border: Color::Rgb(140, 143, 161),       // #8c8fa1 (overlay2)
            shadow: Color::Rgb(188, 192, 204),            // #bcc0cc (surface1)
            overlay_dim: Color::Rgb(156, 160, 176),       // #9ca0b0 (overlay0)
            glyph_badge: Color::Rgb(204, 208, 218),       // #ccd0da (surface0)
            glyph_cross: Color::Rgb(0, 0, 0),             // #000000
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            appearance: Appearance::Dark,
            background: Color::Rgb(46, 52, 64),           // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),        // #eceff4 (nord6)
            accent: Color::Rgb(136, 192, 208),            // #88c0d0 (nord8)
            dimmed: Color::Rgb(216, 222, 233),            // #d8dee9 (nord4)
            card_surface: Color::Rgb(59, 66, 82),         // #3b4252 (nord1)
            card_surface_muted: Color::Rgb(59, 66, 82),   // #3b4252 (nord1)
            card_border: Color::Rgb(76, 86, 106),         // #4c566a (nord3)
            shadow: Color::Rgb(36, 41, 51),               // #242933
            overlay_dim: Color::Rgb(76, 86, 106),         // #4c566a (nord3)
            glyph_badge: Color::Rgb(67, 76, 94),          // #434c5e (nord2)
            glyph_cross: Color::Rgb(255, 255, 255),       // #ffffff
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            appearance: Appearance::Dark,
            background: Color::Rgb(40, 40, 40),           // #282828 (bg)
            foreground: Color::Rgb(235, 219, 178),        // #ebdbb2 (fg)
            accent: Color::Rgb(215, 153, 33),             // #d79921 (yellow)
            dimmed: Color::Rgb(168, 153, 132),            // #a89984 (gray)
            card_surface: Color::Rgb(60, 56, 54),         // #3c3836 (bg1)
            card_surface_muted: Color::Rgb(60, 56, 54),   // #3c3836 (bg1)
            card_border: Color::Rgb(146, 131, 116),       // #928374 (gray)
            shadow: Color::Rgb(29, 32, 33),               // #1d2021 (bg0_h)
            overlay_dim: Color::Rgb(146, 131, 116),       // #928374 (gray)
            glyph_badge: Color::Rgb(80, 73, 69),          // #504945 (bg2)
            glyph_cross: Color::Rgb(255, 255, 255),       // #ffffff
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "darkwall" | "default" | "dark" => Some(Self::darkwall()),
            "light" => Some(Self::light()),
            "catppuccin-mocha" | "catppuccin_mocha" | "catppuccin" => Some(Self::catppuccin_mocha()),
            "catppuccin-latte" | "catppuccin_latte" => Some(Self::catppuccin_latte()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }

    /// Default preset for an appearance
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::darkwall(),
        }
    }

    /// Same palette, different appearance.
    ///
    /// The cross glyph follows the appearance: black on light, white on dark.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self.glyph_cross = match appearance {
            Appearance::Light => Color::Rgb(0, 0, 0),
            Appearance::Dark => Color::Rgb(255, 255, 255),
        };
        self
    }

    pub fn is_light(&self) -> bool {
        self.appearance.is_light()
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    match s.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[1..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[2..3], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        // #rrggbb, #rrggbbaa (alpha ignored)
        6 | 8 => {
            let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r, g, b))
        }
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Serde deserializer for optional hex colors
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#ff0000"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Ok(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#0d1116"), Ok(Color::Rgb(13, 17, 22)));
    }

    #[test]
    fn test_parse_hex_3_and_8() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#ff0000ff"), Ok(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex_color("#gg0000"), Err(ColorError::InvalidHex));
        assert_eq!(parse_hex_color("#ff00"), Err(ColorError::InvalidLength));
        assert_eq!(parse_hex_color("ééé"), Err(ColorError::InvalidHex));
    }

    #[test]
    fn test_presets() {
        assert!(Theme::from_preset("darkwall").is_some());
        assert!(Theme::from_preset("light").is_some_and(|t| t.is_light()));
        assert!(Theme::from_preset("catppuccin-latte").is_some_and(|t| t.is_light()));
        assert!(Theme::from_preset("nord").is_some_and(|t| !t.is_light()));
        assert!(Theme::from_preset("nonexistent").is_none());
    }

    #[test]
    fn test_with_appearance_recolors_cross() {
        let theme = Theme::nord().with_appearance(Appearance::Light);
        assert!(theme.is_light());
        assert_eq!(theme.glyph_cross, Color::Rgb(0, 0, 0));
        assert_eq!(Appearance::Light.flipped(), Appearance::Dark);
    }
}
