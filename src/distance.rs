//! Screen distances and unit conversion
//!
//! A [`ScreenDistance`] normalizes any mix of pixels, millimeters,
//! centimeters and inches into a single pixel count, using the display's
//! DPI sampled when the distance is created.

use std::fmt;

use crate::constants::units;
use crate::screen::Screen;
use crate::toolkit::{ToTcl, Toolkit};
use crate::{MiscError, Result};

/// Length units understood by the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Pixels,
    Millimeters,
    Centimeters,
    Inches,
}

impl Unit {
    /// Toolkit distance suffix
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Pixels => "",
            Unit::Millimeters => "m",
            Unit::Centimeters => "c",
            Unit::Inches => "i",
        }
    }

    /// Unit for a trailing `m`, `c` or `i`
    pub fn from_suffix(suffix: char) -> Option<Unit> {
        match suffix {
            'm' => Some(Unit::Millimeters),
            'c' => Some(Unit::Centimeters),
            'i' => Some(Unit::Inches),
            _ => None,
        }
    }

    /// Pixels per one of this unit at `dpi`
    pub fn pixels_per_unit(self, dpi: f64) -> f64 {
        match self {
            Unit::Pixels => 1.0,
            Unit::Millimeters => dpi / units::MM_PER_INCH,
            Unit::Centimeters => dpi / units::CM_PER_INCH,
            Unit::Inches => dpi,
        }
    }
}

/// Amounts to add up into a [`ScreenDistance`]
///
/// Every non-zero field contributes; `px: 10, inch: 1` is ten pixels more
/// than one inch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceParts {
    pub px: f64,
    pub mm: f64,
    pub cm: f64,
    pub inch: f64,
}

impl DistanceParts {
    /// A single amount in `unit`
    pub fn of(amount: f64, unit: Unit) -> Self {
        let mut parts = Self::default();
        match unit {
            Unit::Pixels => parts.px = amount,
            Unit::Millimeters => parts.mm = amount,
            Unit::Centimeters => parts.cm = amount,
            Unit::Inches => parts.inch = amount,
        }
        parts
    }

    /// Sum of all parts in pixels at `dpi`
    pub fn to_pixels(&self, dpi: f64) -> f64 {
        [
            (self.cm, Unit::Centimeters),
            (self.px, Unit::Pixels),
            (self.mm, Unit::Millimeters),
            (self.inch, Unit::Inches),
        ]
        .into_iter()
        .filter(|(amount, _)| *amount != 0.0)
        .map(|(amount, unit)| amount * unit.pixels_per_unit(dpi))
        .sum()
    }
}

fn round4(x: f64) -> f64 {
    let scale = 10f64.powi(units::DISTANCE_PRECISION);
    (x * scale).round() / scale
}

/// A length on screen, stored in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenDistance {
    distance: f64,
    dpi: f64,
}

impl ScreenDistance {
    /// Sum `parts` into pixels using the display's current DPI
    ///
    /// # Errors
    ///
    /// Propagates toolkit errors from the DPI query
    pub fn new<T: Toolkit + ?Sized>(tk: &T, parts: DistanceParts) -> Result<Self> {
        let dpi = Screen::dpi(tk)?;
        Ok(Self::with_dpi(parts, dpi))
    }

    /// Sum `parts` into pixels using a known DPI
    pub fn with_dpi(parts: DistanceParts, dpi: f64) -> Self {
        let distance = parts.to_pixels(dpi);
        log::trace!("screen distance {:?} at {} dpi = {}px", parts, dpi, distance);
        Self { distance, dpi }
    }

    /// `px` pixels
    pub fn from_px<T: Toolkit + ?Sized>(tk: &T, px: f64) -> Result<Self> {
        Self::new(tk, DistanceParts::of(px, Unit::Pixels))
    }

    /// `mm` millimeters at the display's DPI
    pub fn from_mm<T: Toolkit + ?Sized>(tk: &T, mm: f64) -> Result<Self> {
        Self::new(tk, DistanceParts::of(mm, Unit::Millimeters))
    }

    /// `cm` centimeters at the display's DPI
    pub fn from_cm<T: Toolkit + ?Sized>(tk: &T, cm: f64) -> Result<Self> {
        Self::new(tk, DistanceParts::of(cm, Unit::Centimeters))
    }

    /// `inch` inches at the display's DPI
    pub fn from_inch<T: Toolkit + ?Sized>(tk: &T, inch: f64) -> Result<Self> {
        Self::new(tk, DistanceParts::of(inch, Unit::Inches))
    }

    /// Decode a toolkit distance such as `"2.5c"`, `"10m"`, `"1i"` or `"42"`
    pub fn from_tcl<T: Toolkit + ?Sized>(tk: &T, value: &str) -> Result<Self> {
        let (amount, unit) = parse_distance(value)?;
        Self::new(tk, DistanceParts::of(amount, unit))
    }

    /// DPI captured at construction
    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Unrounded pixel count
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Value in `unit`, rounded to 4 decimal places
    pub fn get(&self, unit: Unit) -> f64 {
        round4(self.distance / unit.pixels_per_unit(self.dpi))
    }

    /// Pixels, to 4 decimal places
    pub fn px(&self) -> f64 {
        self.get(Unit::Pixels)
    }

    /// Millimeters, to 4 decimal places
    pub fn mm(&self) -> f64 {
        self.get(Unit::Millimeters)
    }

    /// Centimeters, to 4 decimal places
    pub fn cm(&self) -> f64 {
        self.get(Unit::Centimeters)
    }

    /// Inches, to 4 decimal places
    pub fn inch(&self) -> f64 {
        self.get(Unit::Inches)
    }

    /// Nearest whole pixel
    pub fn round(&self) -> i64 {
        self.distance.round() as i64
    }
}

impl From<ScreenDistance> for f64 {
    fn from(distance: ScreenDistance) -> Self {
        distance.px()
    }
}

impl fmt::Display for ScreenDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.distance)
    }
}

impl ToTcl for ScreenDistance {
    fn to_tcl(&self) -> String {
        self.distance.to_tcl()
    }
}

/// Split a toolkit distance into its amount and unit
///
/// A trailing `c`, `m` or `i` selects the unit; any other trailing letter
/// is dropped and the amount read as pixels.
pub fn parse_distance(value: &str) -> Result<(f64, Unit)> {
    let value = value.trim();
    let invalid = || MiscError::invalid_parameter("distance", value);

    let last = value.chars().last().ok_or_else(invalid)?;
    let (number, unit) = match Unit::from_suffix(last) {
        Some(unit) => (&value[..value.len() - 1], unit),
        None if last.is_ascii_digit() || last == '.' => (value, Unit::Pixels),
        None => (&value[..value.len() - last.len_utf8()], Unit::Pixels),
    };

    let amount = number.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok((amount, unit))
}
