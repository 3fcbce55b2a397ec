//! Screen metrics
//!
//! [`Screen`] is a namespace: every query goes straight to the toolkit and
//! nothing is cached.

use crate::constants::{ASPECT_RATIOS, COLOR_DEPTHS, RESOLUTION_STANDARDS};
use crate::distance::{ScreenDistance, Unit};
use crate::toolkit::{Toolkit, ToolkitExt};
use crate::Result;

/// Queries about the primary screen
pub struct Screen;

impl Screen {
    /// Width in pixels
    pub fn width_px<T: Toolkit + ?Sized>(tk: &T) -> Result<i64> {
        tk.call_as(&["winfo", "screenwidth", "."])
    }

    /// Height in pixels
    pub fn height_px<T: Toolkit + ?Sized>(tk: &T) -> Result<i64> {
        tk.call_as(&["winfo", "screenheight", "."])
    }

    /// Width as a distance
    pub fn width<T: Toolkit + ?Sized>(tk: &T) -> Result<ScreenDistance> {
        ScreenDistance::from_px(tk, Self::width_px(tk)? as f64)
    }

    /// Height as a distance
    pub fn height<T: Toolkit + ?Sized>(tk: &T) -> Result<ScreenDistance> {
        ScreenDistance::from_px(tk, Self::height_px(tk)? as f64)
    }

    pub fn size<T: Toolkit + ?Sized>(tk: &T) -> Result<(ScreenDistance, ScreenDistance)> {
        Ok((Self::width(tk)?, Self::height(tk)?))
    }

    /// Width times height, as a pixel count
    pub fn area<T: Toolkit + ?Sized>(tk: &T) -> Result<ScreenDistance> {
        let area = Self::width_px(tk)? * Self::height_px(tk)?;
        ScreenDistance::from_px(tk, area as f64)
    }

    /// Length of the diagonal
    pub fn diagonal<T: Toolkit + ?Sized>(tk: &T) -> Result<ScreenDistance> {
        let (w, h) = (Self::width_px(tk)? as f64, Self::height_px(tk)? as f64);
        ScreenDistance::from_px(tk, w.hypot(h))
    }

    /// Aspect ratio such as `"16:9"`
    ///
    /// Common ratios are recognized by value (1280x800 is `"16:10"`);
    /// anything else is the reduced `width:height`.
    pub fn aspect_ratio<T: Toolkit + ?Sized>(tk: &T) -> Result<String> {
        let (w, h) = (Self::width_px(tk)?, Self::height_px(tk)?);
        Ok(aspect_ratio(w, h))
    }

    /// Named resolution standard, or an empty string
    pub fn resolution_standard<T: Toolkit + ?Sized>(tk: &T) -> Result<String> {
        let size = (Self::width_px(tk)?, Self::height_px(tk)?);
        Ok(RESOLUTION_STANDARDS
            .iter()
            .find(|(key, _)| *key == size)
            .map(|(_, name)| name.to_string())
            .unwrap_or_default())
    }

    /// Bits per pixel
    pub fn color_depth<T: Toolkit + ?Sized>(tk: &T) -> Result<i64> {
        tk.call_as(&["winfo", "screendepth", "."])
    }

    /// Marketing name of the color depth, or an empty string
    pub fn color_depth_alias<T: Toolkit + ?Sized>(tk: &T) -> Result<String> {
        let depth = Self::color_depth(tk)?;
        Ok(COLOR_DEPTHS
            .iter()
            .find(|(bits, _)| *bits == depth)
            .map(|(_, name)| name.to_string())
            .unwrap_or_default())
    }

    /// Pixels per inch
    pub fn dpi<T: Toolkit + ?Sized>(tk: &T) -> Result<f64> {
        let one_inch = format!("1{}", Unit::Inches.suffix());
        tk.call_as(&["winfo", "fpixels", ".", one_inch.as_str()])
    }

    /// Same as [`Screen::dpi`]
    pub fn ppi<T: Toolkit + ?Sized>(tk: &T) -> Result<f64> {
        Self::dpi(tk)
    }

    /// `"width;height"` in pixels
    pub fn describe<T: Toolkit + ?Sized>(tk: &T) -> Result<String> {
        let (w, h) = Self::size(tk)?;
        Ok(format!("{};{}", w.px(), h.px()))
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

fn aspect_ratio(width: i64, height: i64) -> String {
    if height == 0 {
        return format!("{}:{}", width, height);
    }

    let ratio = width as f64 / height as f64;
    if let Some((_, _, label)) = ASPECT_RATIOS
        .iter()
        .find(|(num, den, _)| *num as f64 / *den as f64 == ratio)
    {
        return label.to_string();
    }

    let divisor = gcd(width, height).max(1);
    format!("{}:{}", width / divisor, height / divisor)
}
