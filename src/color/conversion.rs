//! Color space conversion kernel
//!
//! Pure functions between RGB and the HEX, HSL, HSV and CMYK spaces:
//! - `to_*` functions take 8-bit RGB channels
//! - `from_*` functions take components in the space's natural range
//!   (hue in degrees 0-360, everything else in percent 0-100)
//!
//! Every output component is rounded half away from zero. Range checking
//! is left to [`Color`](super::Color); out-of-range `from_*` input gives
//! channels that saturate at 0 and 255.

use crate::{MiscError, Result};

/// Round a [0, 255] float to an 8-bit channel, saturating outside it
#[inline]
fn channel(x: f64) -> u8 {
    x.round() as u8
}

/// Round a [0, 1] fraction to an integer percentage
#[inline]
fn percent(x: f64) -> u8 {
    (x * 100.0).round() as u8
}

#[inline]
fn normalize(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
}

/// `#rrggbb` encoding
pub struct Hex;

impl Hex {
    /// Format three channels as lowercase `#rrggbb`
    pub fn to_hex(r: u8, g: u8, b: u8) -> String {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Parse six hex digits, optionally after a single `#`, into channels
    ///
    /// # Errors
    ///
    /// Returns [`MiscError::InvalidColor`] unless exactly six hexadecimal
    /// digits follow the optional `#`
    pub fn from_hex(hex: &str) -> Result<(u8, u8, u8)> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MiscError::invalid_color(format!(
                "invalid hex {:?}: six hex digits expected",
                hex
            )));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| MiscError::invalid_color(format!("invalid hex {:?}: {}", hex, e)))?;

        Ok((
            (value >> 16 & 0xFF) as u8,
            (value >> 8 & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }
}

/// Hue, saturation, lightness
pub struct Hsl;

impl Hsl {
    /// Convert RGB to (hue°, saturation%, lightness%)
    pub fn to_hsl(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
        let (r, g, b) = normalize(r, g, b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let l = (min + max) / 2.0;

        if min == max {
            return (0, 0, percent(l));
        }

        let diff = max - min;
        let s = if l <= 0.5 {
            diff / (max + min)
        } else {
            diff / (2.0 - max - min)
        };

        let h = if max == r {
            (g - b) / diff
        } else if max == g {
            2.0 + (b - r) / diff
        } else {
            4.0 + (r - g) / diff
        };

        let hue = (h * 60.0).rem_euclid(360.0).round() as u16;
        (hue, percent(s), percent(l))
    }

    /// Convert (hue°, saturation%, lightness%) to RGB
    ///
    /// Saturation or lightness above 100 saturates channels at 255.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
        let (h, s, l) = (h / 360.0, s / 100.0, l / 100.0);

        if s == 0.0 {
            let v = channel(l * 255.0);
            return (v, v, v);
        }

        let tmp_1 = if l >= 0.5 { l + s - l * s } else { l * (1.0 + s) };
        let tmp_2 = 2.0 * l - tmp_1;

        let sample = |h: f64| -> f64 {
            let h = h.rem_euclid(1.0);
            if h < 1.0 / 6.0 {
                tmp_2 + (tmp_1 - tmp_2) * h * 6.0
            } else if h < 0.5 {
                tmp_1
            } else if h < 2.0 / 3.0 {
                tmp_2 + (tmp_1 - tmp_2) * (2.0 / 3.0 - h) * 6.0
            } else {
                tmp_2
            }
        };

        (
            channel(sample(h + 1.0 / 3.0) * 255.0),
            channel(sample(h) * 255.0),
            channel(sample(h - 1.0 / 3.0) * 255.0),
        )
    }
}

/// Hue, saturation, value
pub struct Hsv;

impl Hsv {
    /// Convert RGB to (hue°, saturation%, value%)
    pub fn to_hsv(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
        let (r, g, b) = normalize(r, g, b);
        let high = r.max(g).max(b);
        let low = r.min(g).min(b);
        let diff = high - low;

        let s = if high == 0.0 { 0.0 } else { diff / high };

        // Achromatic colors have no hue
        let h = if diff == 0.0 {
            0.0
        } else if high == r {
            (60.0 * ((g - b) / diff) + 360.0).rem_euclid(360.0)
        } else if high == g {
            (60.0 * ((b - r) / diff) + 120.0).rem_euclid(360.0)
        } else {
            (60.0 * ((r - g) / diff) + 240.0).rem_euclid(360.0)
        };

        (h.round() as u16, percent(s), percent(high))
    }

    /// Convert (hue°, saturation%, value%) to RGB
    ///
    /// Value above 100 saturates channels at 255, so `(0, 100, 200)` is
    /// `(255, 0, 0)`.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
        let (h, s, v) = (h / 360.0, s / 100.0, v / 100.0);

        if s == 0.0 {
            let v = channel(v * 255.0);
            return (v, v, v);
        }

        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match (i as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        (channel(r * 255.0), channel(g * 255.0), channel(b * 255.0))
    }
}

/// Cyan, magenta, yellow, key
pub struct Cmyk;

impl Cmyk {
    /// Convert RGB to (c%, m%, y%, k%)
    ///
    /// The key is taken out of each ink by subtraction alone, without
    /// rescaling by `1 − k`. [`Cmyk::from_cmyk`] does rescale, so a round
    /// trip lightens a channel by up to `255·k·(c − k)`, at most a quarter of
    /// the range.
    pub fn to_cmyk(r: u8, g: u8, b: u8) -> (u8, u8, u8, u8) {
        if (r, g, b) == (0, 0, 0) {
            return (0, 0, 0, 100);
        }

        let (r, g, b) = normalize(r, g, b);
        let (c, m, y) = (1.0 - r, 1.0 - g, 1.0 - b);
        let k = c.min(m).min(y);
        let ink = |x: f64| percent(x - k);

        (ink(c), ink(m), ink(y), percent(k))
    }

    /// Convert (c%, m%, y%, k%) to RGB
    ///
    /// Ink coverage is capped at 100%; negative input saturates channels
    /// at 255.
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> (u8, u8, u8) {
        let (c, m, y, k) = (c / 100.0, m / 100.0, y / 100.0, k / 100.0);
        let ink = |x: f64| channel(255.0 * (1.0 - (x * (1.0 - k) + k).min(1.0)));

        (ink(c), ink(m), ink(y))
    }
}
