//! Colour values and RGB <-> HSV conversion
//!
//! Channels are stored as `f64` so that small random drifts accumulate
//! between steps of a walk; they are truncated only when packed.

use std::fmt;
use std::str::FromStr;

/// Hue/saturation/value triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, [0, 360). `None` for achromatic colours.
    pub h: Option<f64>,
    /// Saturation in [0, 1]
    pub s: f64,
    /// Value (brightness) in [0, 1]
    pub v: f64,
}

/// RGB triple with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Convert 0..=255 channels to HSV
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let s = if max != 0.0 { (max - min) / max } else { 0.0 };
    let v = max / 255.0;

    if s == 0.0 {
        return Hsv { h: None, s, v };
    }

    let delta = max - min;
    let sector = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsv { h: Some(h), s, v }
}

/// Convert HSV to RGB components in [0, 1]
///
/// Returns `None` for the contradictory input of zero saturation with a
/// nonzero hue. Hues outside [0, 360) are wrapped.
pub fn hsv_to_rgb(h: Option<f64>, s: f64, v: f64) -> Option<Rgb> {
    if s == 0.0 {
        return match h {
            None => Some(Rgb { r: v, g: v, b: v }),
            Some(h) if h == 0.0 => Some(Rgb { r: v, g: v, b: v }),
            Some(_) => None,
        };
    }

    let h = h.unwrap_or(0.0).rem_euclid(360.0) / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (i as usize).min(5) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Some(Rgb { r, g, b })
}

/// An RGBA colour with 0..=255 channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for Colour {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 255.0,
        }
    }
}

impl Colour {
    /// Build from individual channels, clamped to [0, 255]
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            ..Self::default()
        }
    }

    /// Build from a packed 0xRRGGBB value. Bits above 24 are ignored.
    pub fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as f64,
            g: ((value >> 8) & 0xFF) as f64,
            b: (value & 0xFF) as f64,
            ..Self::default()
        }
    }

    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    /// Pack into 0xRRGGBB, truncating fractional channels
    pub fn to_packed(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Lowercase, unpadded hex of the packed value
    pub fn hex(&self) -> String {
        format!("{:x}", self.to_packed())
    }

    pub fn invert(&mut self) {
        self.r = 255.0 - self.r;
        self.g = 255.0 - self.g;
        self.b = 255.0 - self.b;
    }

    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Set the RGB channels from HSV, keeping alpha
    pub fn set_hsv(&mut self, h: Option<f64>, s: f64, v: f64) -> Result<(), String> {
        let rgb = hsv_to_rgb(h, s, v)
            .ok_or_else(|| format!("Invalid HSV: hue {:?} with zero saturation", h))?;
        self.r = clamp_channel(rgb.r * 255.0);
        self.g = clamp_channel(rgb.g * 255.0);
        self.b = clamp_channel(rgb.b * 255.0);
        Ok(())
    }
}

fn clamp_channel(value: f64) -> f64 {
    value.clamp(0.0, 255.0)
}

impl FromStr for Colour {
    type Err = String;

    /// Accepts `ff8000`, `#FF8000` or `0xff8000`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .trim_start_matches('#')
            .trim_start_matches("0x")
            .trim_start_matches("0X");
        if digits.is_empty() || digits.len() > 6 {
            return Err(format!("Invalid colour: '{}'. Expected up to 6 hex digits", s));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| format!("Invalid colour: '{}': {}", s, e))?;
        Ok(Colour::from_packed(value))
    }
}

impl fmt::Display for Colour {
    /// `#RRGGBB`, uppercase and zero padded
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_packed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb_to_hsv(255.0, 0.0, 0.0), Hsv { h: Some(0.0), s: 1.0, v: 1.0 });
        assert_eq!(rgb_to_hsv(0.0, 255.0, 0.0), Hsv { h: Some(120.0), s: 1.0, v: 1.0 });
        assert_eq!(rgb_to_hsv(0.0, 0.0, 255.0), Hsv { h: Some(240.0), s: 1.0, v: 1.0 });
    }

    #[test]
    fn test_negative_hue_wraps() {
        let hsv = rgb_to_hsv(255.0, 0.0, 128.0);
        let h = hsv.h.unwrap();
        assert!(approx(h, 360.0 - 128.0 / 255.0 * 60.0), "hue was {}", h);
    }

    #[test]
    fn test_grey_has_no_hue() {
        let hsv = rgb_to_hsv(128.0, 128.0, 128.0);
        assert_eq!(hsv.h, None);
        assert_eq!(hsv.s, 0.0);
        assert!(approx(hsv.v, 128.0 / 255.0));

        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), Hsv { h: None, s: 0.0, v: 0.0 });
    }

    #[test]
    fn test_hsv_to_rgb_sectors() {
        assert_eq!(hsv_to_rgb(Some(0.0), 1.0, 1.0), Some(Rgb { r: 1.0, g: 0.0, b: 0.0 }));
        assert_eq!(hsv_to_rgb(Some(120.0), 1.0, 1.0), Some(Rgb { r: 0.0, g: 1.0, b: 0.0 }));
        assert_eq!(hsv_to_rgb(Some(240.0), 1.0, 1.0), Some(Rgb { r: 0.0, g: 0.0, b: 1.0 }));
        // 360 is the same as 0
        assert_eq!(hsv_to_rgb(Some(360.0), 1.0, 1.0), hsv_to_rgb(Some(0.0), 1.0, 1.0));
    }

    #[test]
    fn test_hsv_to_rgb_achromatic() {
        assert_eq!(hsv_to_rgb(None, 0.0, 0.5), Some(Rgb { r: 0.5, g: 0.5, b: 0.5 }));
        assert_eq!(hsv_to_rgb(Some(90.0), 0.0, 0.5), None);
    }

    #[test]
    fn test_hsv_round_trip_through_colour() {
        let original: Colour = "#FF8000".parse().unwrap();
        let hsv = original.to_hsv();

        let mut colour = Colour::default();
        colour.set_hsv(hsv.h, hsv.s, hsv.v).unwrap();
        assert!(approx(colour.r, 255.0));
        assert!(approx(colour.g, 128.0));
        assert!(approx(colour.b, 0.0));
    }

    #[test]
    fn test_set_hsv_rejects_contradiction() {
        let mut colour = Colour::from_packed(0x123456);
        assert!(colour.set_hsv(Some(45.0), 0.0, 1.0).is_err());
        assert_eq!(colour.to_packed(), 0x123456);
    }

    #[test]
    fn test_packed_and_display() {
        let colour = Colour::from_packed(0x0A0B0C);
        assert_eq!(colour.r, 10.0);
        assert_eq!(colour.g, 11.0);
        assert_eq!(colour.b, 12.0);
        assert_eq!(colour.a, 255.0);
        assert_eq!(colour.to_packed(), 0x0A0B0C);
        assert_eq!(colour.to_string(), "#0A0B0C");
        assert_eq!(colour.hex(), "a0b0c");
    }

    #[test]
    fn test_packed_ignores_high_bits() {
        assert_eq!(Colour::from_packed(0x7F_FF8000).to_packed(), 0xFF8000);
    }

    #[test]
    fn test_from_rgb_clamps() {
        let colour = Colour::from_rgb(-12.5, 300.0, 127.9);
        assert_eq!(colour.r, 0.0);
        assert_eq!(colour.g, 255.0);
        assert_eq!(colour.to_string(), "#00FF7F");
    }

    #[test]
    fn test_parse() {
        assert_eq!("ff8000".parse::<Colour>().unwrap().to_packed(), 0xFF8000);
        assert_eq!("0xff8000".parse::<Colour>().unwrap().to_packed(), 0xFF8000);
        assert_eq!(" #fff ".parse::<Colour>().unwrap().to_packed(), 0xFFF);
        assert!("".parse::<Colour>().is_err());
        assert!("#1234567".parse::<Colour>().is_err());
        assert!("zz".parse::<Colour>().is_err());
    }

    #[test]
    fn test_invert() {
        let mut colour = Colour::from_packed(0xFF8000);
        colour.invert();
        assert_eq!(colour.to_string(), "#007FFF");
    }
}
