use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::card::{AnimationTiming, CardModifiers, CardView, DEFAULT_HEIGHT_RATIO};
use crate::haptics::{self, HapticFeedback, NoFeedback};
use crate::ui::theme::{serde_color, Appearance, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub card: CardSettings,
    pub animation: AnimationConfig,
    pub appearance: AppearanceConfig,
    pub haptics: HapticsConfig,
}

/// Initial card options, applied through the card modifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSettings {
    pub corner_radius: f32,
    pub padding: f32,
    pub dismiss_button: bool,
    pub dismiss_on_outside_tap: bool,
    pub overlay: bool,
    pub haptic_on_appear: bool,
    /// Share of the screen height taken by the card
    pub height_ratio: f32,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            corner_radius: crate::card::DEFAULT_CORNER_RADIUS,
            padding: crate::card::DEFAULT_CARD_PADDING,
            dismiss_button: true,
            dismiss_on_outside_tap: true,
            overlay: true,
            haptic_on_appear: false,
            height_ratio: DEFAULT_HEIGHT_RATIO,
        }
    }
}

impl CardSettings {
    /// Configure a card with these settings
    pub fn apply<F>(&self, view: CardView<F>) -> CardView<F> {
        let mut view = view
            .with_corner_radius(self.corner_radius)
            .with_padding(self.padding)
            .with_height_ratio(self.height_ratio);
        if self.dismiss_button {
            view = view.with_dismiss_button();
        }
        if self.dismiss_on_outside_tap {
            view = view.dismiss_on_outside_tap();
        }
        if self.overlay {
            view = view.with_overlay();
        }
        if self.haptic_on_appear {
            view = view.with_haptic_feedback_on_appear();
        }
        view
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Card slide duration in milliseconds
    pub slide_ms: u64,
    /// Overlay fade delay in milliseconds
    pub overlay_delay_ms: u64,
    /// Overlay opacity when dimming (0.0 - 1.0)
    pub dim_opacity: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let timing = AnimationTiming::default();
        Self {
            slide_ms: timing.slide.as_millis() as u64,
            overlay_delay_ms: timing.overlay_delay.as_millis() as u64,
            dim_opacity: timing.dim_opacity,
        }
    }
}

impl AnimationConfig {
    pub fn timing(&self) -> AnimationTiming {
        AnimationTiming {
            slide: Duration::from_millis(self.slide_ms),
            overlay_delay: Duration::from_millis(self.overlay_delay_ms),
            dim_opacity: self.dim_opacity.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset name (darkwall, light, catppuccin, nord, gruvbox)
    pub theme: Option<String>,
    /// Force light or dark regardless of the preset
    pub mode: Option<Appearance>,
    /// Per-color overrides, as hex strings
    pub colors: ColorOverrides,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    #[serde(deserialize_with = "serde_color::deserialize_option", skip_serializing)]
    pub background: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option", skip_serializing)]
    pub card_surface: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option", skip_serializing)]
    pub card_surface_muted: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option", skip_serializing)]
    pub overlay_dim: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option", skip_serializing)]
    pub accent: Option<Color>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticsConfig {
    /// Feedback backend: "bell" or "none"
    pub backend: String,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            backend: "bell".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Default config location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quickcard")
            .join("config.toml")
    }

    /// Resolve the theme: preset, then light/dark override, then colors
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = match &self.appearance.theme {
            Some(name) => Theme::from_preset(name).unwrap_or_else(|| {
                tracing::warn!("Unknown theme preset '{}', using default", name);
                Theme::default()
            }),
            None => Theme::default(),
        };

        if let Some(mode) = self.appearance.mode {
            theme = theme.with_appearance(mode);
        }

        let colors = &self.appearance.colors;
        let overrides = [
            (colors.background, &mut theme.background),
            (colors.card_surface, &mut theme.card_surface),
            (colors.card_surface_muted, &mut theme.card_surface_muted),
            (colors.overlay_dim, &mut theme.overlay_dim),
            (colors.accent, &mut theme.accent),
        ];
        for (value, slot) in overrides {
            if let Some(color) = value {
                *slot = color;
            }
        }

        theme
    }

    /// Resolve the haptic feedback backend
    pub fn resolve_haptics(&self) -> Rc<dyn HapticFeedback> {
        match haptics::from_name(&self.haptics.backend) {
            Some(backend) => Rc::from(backend),
            None => {
                tracing::warn!(
                    "Unknown haptics backend '{}', disabling feedback",
                    self.haptics.backend
                );
                Rc::new(NoFeedback)
            }
        }
    }
}
