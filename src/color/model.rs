//! The `Color` value object
//!
//! A color is stored as three 8-bit RGB channels; every other
//! representation is derived on demand through the conversion kernel.
//!
//! Construction goes through exactly one source: a `#rrggbb` string or a
//! color space tag paired with its components ([`ColorInput`]). The
//! keyword-style [`ColorArgs`] builder is the dynamic entry point and
//! reports ambiguous or missing sources.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use super::conversion::{Cmyk, Hex, Hsl, Hsv};
use crate::constants::limits;
use crate::toolkit::{FromTcl, ToTcl};
use crate::{MiscError, Result};

/// Color spaces accepted by [`Color`] construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    Rgb,
    Hsv,
    Hsl,
    Cmyk,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 4] = [
        ColorSpace::Rgb,
        ColorSpace::Hsv,
        ColorSpace::Hsl,
        ColorSpace::Cmyk,
    ];

    /// Keyword name of the space
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Cmyk => "cmyk",
        }
    }

    /// Upper bound of every component; the lower bound is always 0
    pub fn limits(self) -> &'static [f64] {
        match self {
            ColorSpace::Rgb => &limits::RGB,
            ColorSpace::Hsv => &limits::HSV,
            ColorSpace::Hsl => &limits::HSL,
            ColorSpace::Cmyk => &limits::CMYK,
        }
    }

    /// Number of components
    pub fn arity(self) -> usize {
        self.limits().len()
    }

    /// Whether `components` has the right arity and lies within range
    pub fn accepts(self, components: &[f64]) -> bool {
        components.len() == self.arity() && in_range(components, self.limits())
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = MiscError;

    fn from_str(s: &str) -> Result<Self> {
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.name() == s)
            .ok_or_else(|| MiscError::invalid_color(format!("unknown keyword argument: {}", s)))
    }
}

/// A single, already disambiguated color source
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// `#rrggbb`
    Hex(String),
    /// Components in the given space
    Components(ColorSpace, Vec<f64>),
}

/// An RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Build a color from an RGB triple, which is always valid
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from a validated source
    ///
    /// # Errors
    ///
    /// Returns [`MiscError::InvalidColor`] if the hex string does not match
    /// `#rrggbb`, or the components have the wrong arity or are out of range
    pub fn new(input: ColorInput) -> Result<Self> {
        match input {
            ColorInput::Hex(hex) => Self::from_hex(&hex),
            ColorInput::Components(space, components) => Self::from_space(space, &components),
        }
    }

    /// Parse a `#rrggbb` string
    pub fn from_hex(hex: &str) -> Result<Self> {
        if !is_hex_color(hex) {
            log::trace!("rejected color name {:?}", hex);
            return Err(MiscError::invalid_color(format!("invalid color name: {:?}", hex)));
        }

        let (red, green, blue) = Hex::from_hex(hex)?;
        Ok(Self { red, green, blue })
    }

    /// Build a color from components in `space`
    ///
    /// RGB components are rounded to whole channels.
    pub fn from_space(space: ColorSpace, components: &[f64]) -> Result<Self> {
        if !space.accepts(components) {
            let message = explain(space, components);
            log::trace!("rejected {} components: {}", space, message);
            return Err(MiscError::invalid_color(message));
        }

        let c = components;
        let (red, green, blue) = match space {
            ColorSpace::Rgb => (c[0].round() as u8, c[1].round() as u8, c[2].round() as u8),
            ColorSpace::Hsl => Hsl::from_hsl(c[0], c[1], c[2]),
            ColorSpace::Hsv => Hsv::from_hsv(c[0], c[1], c[2]),
            ColorSpace::Cmyk => Cmyk::from_cmyk(c[0], c[1], c[2], c[3]),
        };
        Ok(Self { red, green, blue })
    }

    /// Keyword-style builder
    pub fn args() -> ColorArgs {
        ColorArgs::default()
    }

    /// Red channel
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Green channel
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Replace every channel with its complement, in place
    pub fn invert(&mut self) -> &mut Self {
        self.red = 255 - self.red;
        self.green = 255 - self.green;
        self.blue = 255 - self.blue;
        self
    }

    /// Blend with `other`, weighting this color `ratio : 1`
    ///
    /// The ratio is taken as its exact binary fraction `a/b`, and each
    /// channel becomes `(a·self + b·other) / (a + b)`, rounded.
    ///
    /// # Errors
    ///
    /// Returns [`MiscError::InvalidParameter`] for non-finite ratios or
    /// `ratio == -1`, and [`MiscError::InvalidColor`] when a negative ratio
    /// pushes a channel out of range.
    pub fn mix(&self, other: &Color, ratio: f64) -> Result<Color> {
        if !ratio.is_finite() {
            return Err(MiscError::invalid_parameter("ratio", ratio));
        }

        let channels = match exact_ratio(ratio) {
            Some((a, b)) => {
                let (a, b) = match a + b {
                    0 => return Err(MiscError::invalid_parameter("ratio", ratio)),
                    den if den < 0 => (-a, -b),
                    _ => (a, b),
                };
                self.weighted(other, a, b).map(|x| x as f64)
            }
            // Ratio too large or small for i128; the weights are then 0 or 1
            // to well beyond 8-bit precision
            None => {
                let weight = ratio / (1.0 + ratio);
                self.pairs(other)
                    .map(|(x, y)| (weight * x as f64 + (1.0 - weight) * y as f64).round())
            }
        };

        Color::from_space(ColorSpace::Rgb, &channels)
    }

    fn pairs(&self, other: &Color) -> [(u8, u8); 3] {
        [
            (self.red, other.red),
            (self.green, other.green),
            (self.blue, other.blue),
        ]
    }

    /// `(a·self + b·other) / (a + b)` per channel, for `a + b > 0`
    fn weighted(&self, other: &Color, a: i128, b: i128) -> [i128; 3] {
        self.pairs(other)
            .map(|(x, y)| round_div(a * x as i128 + b * y as i128, a + b))
    }

    /// Perceived brightness is below the midpoint
    pub fn is_dark(&self) -> bool {
        let luminance =
            (self.red as f64 * 299.0 + self.green as f64 * 587.0 + self.blue as f64 * 114.0)
                / 1000.0;
        luminance < limits::DARK_LUMINANCE
    }

    /// Lowercase `#rrggbb`
    pub fn hex(&self) -> String {
        Hex::to_hex(self.red, self.green, self.blue)
    }

    /// `(red, green, blue)` channels
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// `(hue°, saturation%, value%)`
    pub fn hsv(&self) -> (u16, u8, u8) {
        Hsv::to_hsv(self.red, self.green, self.blue)
    }

    /// `(hue°, saturation%, lightness%)`
    pub fn hsl(&self) -> (u16, u8, u8) {
        Hsl::to_hsl(self.red, self.green, self.blue)
    }

    /// `(cyan%, magenta%, yellow%, key%)`
    pub fn cmyk(&self) -> (u8, u8, u8, u8) {
        Cmyk::to_cmyk(self.red, self.green, self.blue)
    }
}

/// Equal-parts blend, the same as `mix(rhs, 1.0)`
impl BitOr for Color {
    type Output = Color;

    fn bitor(self, rhs: Color) -> Color {
        // A 1:1 average of two channels stays within 0..=255
        let [red, green, blue] = self.weighted(&rhs, 1, 1).map(|x| x as u8);
        Color::from_rgb(red, green, blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = MiscError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

impl TryFrom<String> for Color {
    type Error = MiscError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl ToTcl for Color {
    fn to_tcl(&self) -> String {
        self.hex()
    }
}

impl FromTcl for Color {
    fn from_tcl(value: &str) -> Result<Self> {
        Color::from_hex(value)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(srgb: Srgb<u8>) -> Self {
        Color::from_rgb(srgb.red, srgb.green, srgb.blue)
    }
}

/// Keyword-style color construction: one color name, or one keyword
///
/// ```
/// use tk_misc::Color;
///
/// let teal = Color::args().keyword("rgb", [0.0, 128.0, 128.0]).build()?;
/// assert_eq!(teal.hex(), "#008080");
/// # Ok::<(), tk_misc::MiscError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorArgs {
    name: Option<String>,
    keywords: Vec<(String, Vec<f64>)>,
}

impl ColorArgs {
    /// Positional hex color name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Color space keyword with its components
    pub fn keyword(mut self, space: impl Into<String>, components: impl Into<Vec<f64>>) -> Self {
        self.keywords.push((space.into(), components.into()));
        self
    }

    /// Resolve to a single source and construct the color
    pub fn build(self) -> Result<Color> {
        if self.keywords.len() > 1 {
            return Err(MiscError::invalid_color(
                "too many keyword arguments. 1 expected.",
            ));
        }

        let input = match (self.name, self.keywords.into_iter().next()) {
            (Some(_), Some(_)) => {
                return Err(MiscError::invalid_color(
                    "a single color name, OR a keyword argument is expected.",
                ))
            }
            (None, None) => {
                return Err(MiscError::invalid_color(
                    "a color name or a keyword argument is expected, got neither.",
                ))
            }
            (Some(name), None) => ColorInput::Hex(name),
            (None, Some((space, components))) => {
                ColorInput::Components(space.parse::<ColorSpace>()?, components)
            }
        };

        Color::new(input)
    }
}

impl TryFrom<ColorArgs> for Color {
    type Error = MiscError;

    fn try_from(args: ColorArgs) -> Result<Self> {
        args.build()
    }
}

/// Matches `^#[0-9a-fA-F]{6}$`
fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

fn in_range(components: &[f64], maximums: &[f64]) -> bool {
    components
        .iter()
        .zip(maximums)
        .all(|(&value, &max)| (0.0..=max).contains(&value))
}

fn format_components(components: &[f64]) -> String {
    let parts: Vec<String> = components.iter().map(|c| c.to_string()).collect();
    format!("({})", parts.join(", "))
}

/// Best-effort explanation of why `components` is not a valid `space`
/// color, naming the spaces it would have fit.
fn explain(space: ColorSpace, components: &[f64]) -> String {
    let mut message = format!(
        "{} is not a valid {} color.",
        format_components(components),
        space
    );

    if components.len() != space.arity() {
        message.push_str(&format!(
            " A tuple of length of {} is expected.",
            space.arity()
        ));
    }

    let fits = |candidate: ColorSpace| candidate.accepts(components);
    let guess = match components.len() {
        4 if fits(ColorSpace::Cmyk) => Some("a cmyk"),
        3 if fits(ColorSpace::Rgb) && in_range(components, &[255.0, 100.0, 100.0]) => {
            Some("either a rgb, a hsl or a hsv")
        }
        3 if fits(ColorSpace::Rgb) => Some("a rgb"),
        3 if fits(ColorSpace::Hsv) => Some("either a hsl or a hsv"),
        3 | 4 => Some("an invalid"),
        _ => None,
    };

    if let Some(guess) = guess {
        message.push_str(&format!(" You passed in {} color.", guess));
    }
    message
}

/// Exact `numerator / denominator` of a finite float, in lowest terms.
/// `None` when either part would not fit comfortably in an `i128`.
fn exact_ratio(x: f64) -> Option<(i128, i128)> {
    if x == 0.0 {
        return Some((0, 1));
    }

    let bits = x.to_bits();
    let sign: i128 = if bits >> 63 == 0 { 1 } else { -1 };
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & 0x000f_ffff_ffff_ffff;

    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | 1 << 52, biased - 1075)
    };

    let shift = mantissa.trailing_zeros() as i32;
    let (mantissa, exponent) = ((mantissa >> shift) as i128, exponent + shift);

    match exponent {
        e if e >= 0 && e <= 64 => Some((sign * (mantissa << e), 1)),
        e if e < 0 && e >= -100 => Some((sign * mantissa, 1i128 << -e)),
        _ => None,
    }
}

/// `num / den` rounded half away from zero, for `den > 0`
fn round_div(num: i128, den: i128) -> i128 {
    if num >= 0 {
        (2 * num + den) / (2 * den)
    } else {
        -((-2 * num + den) / (2 * den))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_construction() {
        let red = Color::from_hex("#ff0000").unwrap();
        assert_eq!(red.rgb(), (255, 0, 0));
        assert_eq!(Color::from_rgb(255, 0, 0).hex(), "#ff0000");
        assert_eq!(Color::from_hex("#ABCDEF").unwrap().hex(), "#abcdef");
    }

    #[test]
    fn test_hex_pattern_rejected() {
        for bad in ["ff0000", "#ff00", "#ff00000", "#gg0000", "", "#ff 000"] {
            let err = Color::from_hex(bad).unwrap_err();
            assert!(err.is_color_error(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_space_construction() {
        assert_eq!(
            Color::from_space(ColorSpace::Hsv, &[0.0, 100.0, 100.0]).unwrap().rgb(),
            (255, 0, 0)
        );
        assert_eq!(
            Color::from_space(ColorSpace::Hsl, &[120.0, 100.0, 50.0]).unwrap().rgb(),
            (0, 255, 0)
        );
        assert_eq!(
            Color::from_space(ColorSpace::Cmyk, &[0.0, 0.0, 0.0, 100.0]).unwrap().rgb(),
            (0, 0, 0)
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = Color::from_space(ColorSpace::Rgb, &[256.0, 0.0, 0.0]).unwrap_err();
        assert!(err.is_color_error());
        assert!(Color::from_space(ColorSpace::Rgb, &[-1.0, 0.0, 0.0]).is_err());
        assert!(Color::from_space(ColorSpace::Hsv, &[361.0, 0.0, 0.0]).is_err());
        assert!(Color::from_space(ColorSpace::Cmyk, &[0.0, 0.0, 0.0, 101.0]).is_err());
        assert!(Color::from_space(ColorSpace::Rgb, &[f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_arity_rejected() {
        let err = Color::from_space(ColorSpace::Cmyk, &[0.0, 0.0, 0.0]).unwrap_err();
        assert!(err.to_string().contains("length of 4"));
        assert!(Color::from_space(ColorSpace::Rgb, &[0.0, 0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_explain_suggests_hsv() {
        // A valid hue of 300 does not fit rgb's red channel
        let err = Color::from_space(ColorSpace::Rgb, &[300.0, 50.0, 50.0]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not a valid rgb color"));
        assert!(message.contains("hsl or a hsv"));
    }

    #[test]
    fn test_explain_suggests_rgb() {
        let err = Color::from_space(ColorSpace::Hsv, &[10.0, 200.0, 30.0]).unwrap_err();
        assert!(err.to_string().contains("a rgb color"));
    }

    #[test]
    fn test_args_builder() {
        let color = Color::args().keyword("rgb", [1.0, 2.0, 3.0]).build().unwrap();
        assert_eq!(color.rgb(), (1, 2, 3));

        let color = Color::args().name("#010203").build().unwrap();
        assert_eq!(color.rgb(), (1, 2, 3));
    }

    #[test]
    fn test_args_count_errors() {
        assert!(Color::args().build().unwrap_err().is_color_error());

        let err = Color::args()
            .keyword("rgb", [1.0, 2.0, 3.0])
            .keyword("hsv", [1.0, 2.0, 3.0])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("too many keyword arguments"));

        let err = Color::args()
            .name("#000000")
            .keyword("rgb", [0.0, 0.0, 0.0])
            .build()
            .unwrap_err();
        assert!(err.is_color_error());
    }

    #[test]
    fn test_args_unknown_keyword() {
        let err = Color::args().keyword("yiq", [0.0, 0.0, 0.0]).build().unwrap_err();
        assert!(err.to_string().contains("unknown keyword argument: yiq"));
    }

    #[test]
    fn test_invert_chains() {
        let mut color = Color::from_rgb(10, 20, 30);
        assert_eq!(color.invert().rgb(), (245, 235, 225));
        assert_eq!(color.invert().invert().rgb(), (245, 235, 225));
    }

    #[test]
    fn test_mix_equal_parts() {
        let black = Color::from_rgb(0, 0, 0);
        let white = Color::from_rgb(255, 255, 255);
        assert_eq!(black.mix(&white, 1.0).unwrap().rgb(), (128, 128, 128));
        assert_eq!((black | white).rgb(), (128, 128, 128));
    }

    #[test]
    fn test_bitor_matches_mix_one_to_one() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(51) {
                let a = Color::from_rgb(r, g, 255 - r);
                let b = Color::from_rgb(g, 255 - g, r);
                assert_eq!(a | b, a.mix(&b, 1.0).unwrap(), "{} | {}", a, b);
            }
        }
    }

    #[test]
    fn test_mix_ratio_weights_self() {
        let black = Color::from_rgb(0, 0, 0);
        let white = Color::from_rgb(255, 255, 255);
        // 0.5 == 1/2: one part black, two parts white
        assert_eq!(black.mix(&white, 0.5).unwrap().rgb(), (170, 170, 170));
        // 3.0 == 3/1
        assert_eq!(white.mix(&black, 3.0).unwrap().rgb(), (191, 191, 191));
        assert_eq!(black.mix(&white, 0.0).unwrap(), white);
    }

    #[test]
    fn test_mix_uses_exact_fraction() {
        // 0.1 is not 1/10 in binary, but the blend is still ~1:9
        let black = Color::from_rgb(0, 0, 0);
        let white = Color::from_rgb(250, 250, 250);
        assert_eq!(black.mix(&white, 0.1).unwrap().rgb(), (227, 227, 227));
    }

    #[test]
    fn test_mix_extreme_ratios() {
        let black = Color::from_rgb(0, 0, 0);
        let white = Color::from_rgb(255, 255, 255);
        assert_eq!(black.mix(&white, 1e300).unwrap(), black);
        assert_eq!(black.mix(&white, 1e-300).unwrap(), white);
    }

    #[test]
    fn test_mix_invalid_ratio() {
        let black = Color::from_rgb(0, 0, 0);
        let white = Color::from_rgb(255, 255, 255);
        assert!(black.mix(&white, f64::NAN).is_err());
        assert!(black.mix(&white, f64::INFINITY).is_err());
        assert!(black.mix(&white, -1.0).is_err());
        // -2/1: channel = (-2·255 + 0) / -1 = 510
        assert!(white.mix(&black, -2.0).is_err());
    }

    #[test]
    fn test_exact_ratio() {
        assert_eq!(exact_ratio(0.5), Some((1, 2)));
        assert_eq!(exact_ratio(1.0), Some((1, 1)));
        assert_eq!(exact_ratio(6.0), Some((6, 1)));
        assert_eq!(exact_ratio(-0.75), Some((-3, 4)));
        assert_eq!(
            exact_ratio(0.1),
            Some((3602879701896397, 36028797018963968))
        );
        assert_eq!(exact_ratio(1e300), None);
    }

    #[test]
    fn test_is_dark() {
        assert!(Color::from_rgb(0, 0, 0).is_dark());
        assert!(!Color::from_rgb(255, 255, 255).is_dark());
        assert!(Color::from_rgb(0, 0, 255).is_dark());
        assert!(!Color::from_rgb(255, 255, 0).is_dark());
    }

    #[test]
    fn test_derived_accessors() {
        let gray = Color::from_rgb(128, 128, 128);
        assert_eq!(gray.hsv(), (0, 0, 50));
        assert_eq!(gray.hsl(), (0, 0, 50));
        assert_eq!(Color::from_rgb(0, 0, 0).cmyk(), (0, 0, 0, 100));
    }

    #[test]
    fn test_tcl_codec() {
        let color = Color::from_tcl("#336699").unwrap();
        assert_eq!(color.to_tcl(), "#336699");
        assert_eq!(color.to_string(), "#336699");
        assert_eq!("#336699".parse::<Color>().unwrap(), color);
    }

    #[test]
    fn test_serde_as_hex() {
        let color = Color::from_rgb(1, 2, 3);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }

    #[test]
    fn test_palette_interop() {
        let srgb: Srgb<u8> = Color::from_rgb(10, 20, 30).into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (10, 20, 30));
        assert_eq!(Color::from(srgb), Color::from_rgb(10, 20, 30));
    }
}
