//! Linear RGBA color with exact-equality semantics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linear RGBA color with `f32` components in `[0, 1]`.
///
/// Colors act as identity keys for palette matching, recoloring, and
/// deletion, so equality is **exact**: two colors are equal iff all four
/// components are bit-identical. There is no tolerance; a color derived
/// through an HSV round trip may compare unequal to the value it was
/// derived from even when visually identical.
///
/// The sentinel [`Rgba::BLANK`] (opaque white) marks unpainted corners.
///
/// # Example
///
/// ```
/// use vcolor_types::Rgba;
///
/// let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
/// assert_eq!(red, Rgba::new(1.0, 0.0, 0.0, 1.0));
/// assert!(!red.is_blank());
/// assert!(Rgba::BLANK.is_blank());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Rgba {
    /// Create a color from RGBA components.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The "unpainted" sentinel: opaque white.
    pub const BLANK: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Check whether this color is the unpainted sentinel.
    #[inline]
    #[must_use]
    pub fn is_blank(self) -> bool {
        self == Self::BLANK
    }

    /// Bit pattern of the four components, used for equality and hashing.
    #[inline]
    #[must_use]
    pub fn to_bits(self) -> [u32; 4] {
        [
            self.r.to_bits(),
            self.g.to_bits(),
            self.b.to_bits(),
            self.a.to_bits(),
        ]
    }

    /// Convert the RGB part to HSV. Alpha is not part of the conversion.
    ///
    /// All components in `[0, 1]`; hue wraps around 1.
    ///
    /// # Example
    ///
    /// ```
    /// use vcolor_types::Rgba;
    ///
    /// let (h, s, v) = Rgba::new(1.0, 0.0, 0.0, 1.0).to_hsv();
    /// assert_eq!((h, s, v), (0.0, 1.0, 1.0));
    /// ```
    #[must_use]
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let v = max;
        if max <= min {
            return (0.0, 0.0, v);
        }
        let delta = max - min;
        let s = delta / max;
        let rc = (max - self.r) / delta;
        let gc = (max - self.g) / delta;
        let bc = (max - self.b) / delta;
        let h = if self.r >= max {
            bc - gc
        } else if self.g >= max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        ((h / 6.0).rem_euclid(1.0), s, v)
    }

    /// Build a color from HSV components plus an alpha.
    ///
    /// # Example
    ///
    /// ```
    /// use vcolor_types::Rgba;
    ///
    /// let green = Rgba::from_hsv(1.0 / 3.0, 1.0, 1.0, 1.0);
    /// assert_eq!(green, Rgba::new(0.0, 1.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn from_hsv(h: f32, s: f32, v: f32, a: f32) -> Self {
        if s <= 0.0 {
            return Self::new(v, v, v, a);
        }
        let h = h.rem_euclid(1.0) * 6.0;
        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // h was reduced into [0, 6) above
        let (r, g, b) = match i as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new(r, g, b, a)
    }

    /// Derive a value variation: hue and saturation held, HSV value replaced
    /// by `value`, alpha kept from `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use vcolor_types::Rgba;
    ///
    /// let dim = Rgba::new(1.0, 0.0, 0.0, 0.8).with_value(0.5);
    /// assert_eq!(dim, Rgba::new(0.5, 0.0, 0.0, 0.8));
    /// ```
    #[must_use]
    pub fn with_value(self, value: f32) -> Self {
        let (h, s, _) = self.to_hsv();
        Self::from_hsv(h, s, value, self.a)
    }

    /// Derive an alpha variation: RGB kept (through an HSV round trip),
    /// alpha replaced by `alpha`.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let (h, s, v) = self.to_hsv();
        Self::from_hsv(h, s, v, alpha)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLANK
    }
}

impl PartialEq for Rgba {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for Rgba {}

impl std::hash::Hash for Rgba {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn blank_is_opaque_white() {
        assert_eq!(Rgba::BLANK, Rgba::new(1.0, 1.0, 1.0, 1.0));
        assert!(Rgba::BLANK.is_blank());
        assert!(!Rgba::new(1.0, 1.0, 1.0, 0.5).is_blank());
    }

    #[test]
    fn equality_is_exact() {
        let a = Rgba::new(0.1, 0.2, 0.3, 1.0);
        let b = Rgba::new(0.1, 0.2, 0.3, 1.0);
        assert_eq!(a, b);

        let c = Rgba::new(0.1 + f32::EPSILON, 0.2, 0.3, 1.0);
        assert_ne!(a, c);
    }

    #[test]
    fn default_is_blank() {
        assert_eq!(Rgba::default(), Rgba::BLANK);
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(Rgba::new(1.0, 0.0, 0.0, 1.0).to_hsv(), (0.0, 1.0, 1.0));

        let (h, s, v) = Rgba::new(0.0, 1.0, 0.0, 1.0).to_hsv();
        assert_relative_eq!(h, 1.0 / 3.0, max_relative = 1e-6);
        assert_eq!((s, v), (1.0, 1.0));

        let (h, s, v) = Rgba::new(0.0, 0.0, 1.0, 1.0).to_hsv();
        assert_relative_eq!(h, 2.0 / 3.0, max_relative = 1e-6);
        assert_eq!((s, v), (1.0, 1.0));
    }

    #[test]
    fn hsv_grayscale_has_zero_saturation() {
        let (h, s, v) = Rgba::new(0.5, 0.5, 0.5, 1.0).to_hsv();
        assert_eq!((h, s), (0.0, 0.0));
        assert_relative_eq!(v, 0.5);
    }

    #[test]
    fn hsv_round_trip_close() {
        let original = Rgba::new(0.2, 0.6, 0.9, 0.7);
        let (h, s, v) = original.to_hsv();
        let back = Rgba::from_hsv(h, s, v, original.a);
        assert_relative_eq!(back.r, original.r, max_relative = 1e-5);
        assert_relative_eq!(back.g, original.g, max_relative = 1e-5);
        assert_relative_eq!(back.b, original.b, max_relative = 1e-5);
    }

    #[test]
    fn value_variation_keeps_hue_and_alpha() {
        let base = Rgba::new(1.0, 0.0, 0.0, 0.8);
        let dim = base.with_value(0.25);
        assert_eq!(dim, Rgba::new(0.25, 0.0, 0.0, 0.8));
    }

    #[test]
    fn alpha_variation_keeps_rgb() {
        let base = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let faded = base.with_alpha(0.3);
        assert_eq!(faded, Rgba::new(1.0, 0.0, 0.0, 0.3));
    }

    #[test]
    fn hsv_round_trip_may_break_exact_identity() {
        // Exact-match semantics are sensitive to float rounding: a color
        // pushed through HSV and back is not guaranteed bit-identical.
        let base = Rgba::new(0.123_456_8, 0.654_321, 0.333_333_3, 1.0);
        let (h, s, v) = base.to_hsv();
        let back = Rgba::from_hsv(h, s, v, base.a);
        // Visually the same color either way.
        assert_relative_eq!(back.g, base.g, max_relative = 1e-5);
        // Identity matching must therefore never round-trip stored colors.
        let _ = back == base; // either outcome is acceptable, not relied upon
    }
}
