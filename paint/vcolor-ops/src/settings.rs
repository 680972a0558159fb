//! Host-owned paint settings, passed explicitly into each operation.
//!
//! Nothing here is ambient state: the host persists these between calls
//! and hands them to every operation that needs them.

use vcolor_palette::LabelFormat;
use vcolor_types::Rgba;

use crate::edit::Interpolation;

/// Paint configuration owned by the host.
#[derive(Debug, Clone)]
pub struct PaintSettings {
    /// The active color request.
    pub active_color: Rgba,
    /// The alternate color the host can swap with the active one.
    pub alt_color: Rgba,
    /// HSV value slider in `[0, 1]` for value variations.
    pub value_slider: f32,
    /// Alpha slider in `[0, 1]` for alpha variations.
    pub alpha_slider: f32,
    /// Boundary interpolation policy applied by fills.
    pub interpolation: Interpolation,
    /// Palette label display format.
    pub label_format: LabelFormat,
    /// Whether edits trigger a palette refresh automatically. The host
    /// turns this off around bulk edits and refreshes once at the end.
    pub auto_refresh: bool,
    /// Advisory cap on palette entries per object, enforced by the UI.
    pub max_palette_entries: u32,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            active_color: Rgba::BLANK,
            alt_color: Rgba::BLANK,
            value_slider: 1.0,
            alpha_slider: 1.0,
            interpolation: Interpolation::Smooth,
            label_format: LabelFormat::Rgb255,
            auto_refresh: true,
            max_palette_entries: 25,
        }
    }
}

/// Where an edit's color value comes from.
///
/// Resolution happens once per operation against the current
/// [`PaintSettings`], so a variation is derived from the active color as
/// it stands at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSource {
    /// No source supplied: resolves to [`Rgba::BLANK`].
    #[default]
    Blank,
    /// The active color.
    Active,
    /// The alternate color.
    Alt,
    /// The active color with its HSV value replaced by the value slider.
    ValueVariation,
    /// The active color with its alpha replaced by the alpha slider.
    AlphaVariation,
    /// An explicit color (palette swatches, custom presets).
    Custom(Rgba),
}

impl ColorSource {
    /// Resolve to a concrete color against the given settings.
    #[must_use]
    pub fn resolve(self, settings: &PaintSettings) -> Rgba {
        match self {
            Self::Blank => Rgba::BLANK,
            Self::Active => settings.active_color,
            Self::Alt => settings.alt_color,
            Self::ValueVariation => settings.active_color.with_value(settings.value_slider),
            Self::AlphaVariation => settings.active_color.with_alpha(settings.alpha_slider),
            Self::Custom(color) => color,
        }
    }
}
