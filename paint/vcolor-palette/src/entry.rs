//! Palette entries and display labels.

use vcolor_types::Rgba;

/// How palette entry labels are formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelFormat {
    /// Rounded 0-255 RGB components plus 2-decimal alpha.
    #[default]
    Rgb255,
    /// 2-decimal HSV components plus 2-decimal alpha.
    Hsv,
}

/// One deduplicated color observed on a mesh.
///
/// `id` is the entry's position in the palette and is reassigned on every
/// refresh. `saved_color` is the value captured at the last refresh and is
/// what recoloring matches against; `color` is the current (UI-editable)
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// Position index, reassigned on every refresh.
    pub id: usize,
    /// Current color value.
    pub color: Rgba,
    /// Color value at the last refresh; the key for corner matching.
    pub saved_color: Rgba,
    /// Display label.
    pub label: String,
}

/// Format a color as a display label.
///
/// # Example
///
/// ```
/// use vcolor_palette::{format_label, LabelFormat};
/// use vcolor_types::Rgba;
///
/// let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
/// assert_eq!(format_label(red, LabelFormat::Rgb255), "(255, 0, 0, 1.0)");
/// assert_eq!(format_label(red, LabelFormat::Hsv), "(0.0, 1.0, 1.0, 1.0)");
/// ```
#[must_use]
pub fn format_label(color: Rgba, format: LabelFormat) -> String {
    match format {
        LabelFormat::Rgb255 => format!(
            "({}, {}, {}, {})",
            channel_255(color.r),
            channel_255(color.g),
            channel_255(color.b),
            round2(color.a),
        ),
        LabelFormat::Hsv => {
            let (h, s, v) = color.to_hsv();
            format!(
                "({}, {}, {}, {})",
                round2(h),
                round2(s),
                round2(v),
                round2(color.a),
            )
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Input is a color channel in [0, 1]
fn channel_255(c: f32) -> u32 {
    (c * 255.0).round() as u32
}

/// Round to two decimals, keeping at least one decimal place
/// ("1.0", "0.5", "0.25").
fn round2(x: f32) -> String {
    let mut s = format!("{x:.2}");
    if s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}
