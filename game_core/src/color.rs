use serde::{Deserialize, Serialize};

/// RGBA colour with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
            1.0,
        )
    }

    /// Component-wise blend; `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Hue in degrees `[0, 360)`, saturation/lightness/alpha in `[0, 1]`
    pub fn to_hsla(self) -> (f32, f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d <= f32::EPSILON {
            return (0.0, 0.0, l, self.a);
        }

        let s = d / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == self.r {
            60.0 * ((self.g - self.b) / d).rem_euclid(6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / d + 2.0)
        } else {
            60.0 * ((self.r - self.g) / d + 4.0)
        };

        (h.rem_euclid(360.0), s.clamp(0.0, 1.0), l, self.a)
    }

    pub fn from_hsla(h: f32, s: f32, l: f32, a: f32) -> Color {
        let h = h.rem_euclid(360.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::new(r + m, g + m, b + m, a)
    }

    /// Same saturation and lightness, different hue
    pub fn with_hue(self, hue: f32) -> Color {
        let (_, s, l, a) = self.to_hsla();
        Color::from_hsla(hue, s, l, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-3
            && (a.g - b.g).abs() < 1e-3
            && (a.b - b.b).abs() < 1e-3
            && (a.a - b.a).abs() < 1e-3
    }

    #[test]
    fn test_from_rgb8() {
        let c = Color::from_rgb8([255, 0, 51]);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_hsla_of_primary_colors() {
        let (h, s, l, _) = Color::new(1.0, 0.0, 0.0, 1.0).to_hsla();
        assert_eq!(h, 0.0);
        assert_eq!(s, 1.0);
        assert_eq!(l, 0.5);

        let (h, _, _, _) = Color::new(0.0, 1.0, 0.0, 1.0).to_hsla();
        assert!((h - 120.0).abs() < 1e-3, "Green hue should be 120, got {}", h);

        let (h, _, _, _) = Color::new(0.0, 0.0, 1.0, 1.0).to_hsla();
        assert!((h - 240.0).abs() < 1e-3, "Blue hue should be 240, got {}", h);
    }

    #[test]
    fn test_grey_has_no_saturation() {
        let (h, s, l, _) = Color::new(0.5, 0.5, 0.5, 1.0).to_hsla();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_hsla_conversion_preserves_ball_color() {
        let ball = Color::from_rgb8([150, 255, 255]);
        let (h, s, l, a) = ball.to_hsla();
        assert!((h - 180.0).abs() < 1e-3, "Cyan hue expected, got {}", h);
        assert!(approx(Color::from_hsla(h, s, l, a), ball));
    }

    #[test]
    fn test_with_hue_keeps_lightness() {
        let ball = Color::from_rgb8([150, 255, 255]);
        let shifted = ball.with_hue(300.0);
        let (h, _, l, _) = shifted.to_hsla();
        assert!((h - 300.0).abs() < 1e-2);
        assert!((l - ball.to_hsla().2).abs() < 1e-3);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert!(approx(a.lerp(b, 0.0), a));
        assert!(approx(a.lerp(b, 1.0), b));
        assert!(approx(a.lerp(b, 0.5), Color::new(0.5, 0.5, 0.5, 1.0)));
        assert!(approx(a.lerp(b, 7.0), b), "t is clamped");
    }
}
