//! Reference values and lookup tables
//!
//! Compile-time constants for color validation, length units and
//! screen classification.

/// Per-component upper bounds of each color space (lower bound is 0)
pub mod limits {
    pub const RGB: [f64; 3] = [255.0, 255.0, 255.0];
    pub const HSV: [f64; 3] = [360.0, 100.0, 100.0];
    pub const HSL: [f64; 3] = [360.0, 100.0, 100.0];
    pub const CMYK: [f64; 4] = [100.0, 100.0, 100.0, 100.0];

    /// Perceived brightness below which a color counts as dark
    pub const DARK_LUMINANCE: f64 = 128.0;
}

/// Length unit ratios
pub mod units {
    pub const MM_PER_INCH: f64 = 25.4;
    pub const CM_PER_INCH: f64 = 2.54;
    /// Typographic points, only understood by the headless toolkit
    pub const POINTS_PER_INCH: f64 = 72.0;

    /// Decimal places kept by distance accessors
    pub const DISTANCE_PRECISION: i32 = 4;
}

/// Named screen resolutions, keyed by (width, height)
pub const RESOLUTION_STANDARDS: &[((i64, i64), &str)] = &[
    ((1024, 600), "WSVGA"),
    ((1024, 768), "XGA"),
    ((1280, 1024), "SXGA"),
    ((1280, 720), "HD 720"),
    ((1280, 768), "WXGA"),
    ((1280, 800), "WXGA"),
    ((1400, 1050), "SXGA+"),
    ((1600, 1200), "UXGA"),
    ((1680, 1050), "WSXGA+"),
    ((1920, 1080), "HD 1080"),
    ((1920, 1200), "WUXGA"),
    ((2048, 1080), "2K"),
    ((2048, 1536), "QXGA"),
    ((2560, 1600), "WQXGA"),
    ((2560, 2048), "QSXGA"),
    ((320, 200), "CGA"),
    ((320, 240), "QVGA"),
    ((640, 480), "VGA"),
    ((768, 576), "PAL"),
    ((800, 480), "WVGA"),
    ((800, 600), "SVGA"),
    ((854, 480), "FWVGA"),
];

/// Common aspect ratios as (numerator, denominator, label)
pub const ASPECT_RATIOS: &[(i64, i64, &str)] = &[
    (16, 10, "16:10"),
    (16, 9, "16:9"),
    (17, 9, "17:9"),
    (3, 2, "3:2"),
    (4, 3, "4:3"),
    (5, 3, "5:3"),
    (5, 4, "5:4"),
];

/// Marketing names for color depths in bits per pixel
pub const COLOR_DEPTHS: &[(i64, &str)] = &[
    (1, "monochrome"),
    (15, "high color"),
    (16, "high color"),
    (24, "true color"),
    (30, "deep color"),
    (36, "deep color"),
    (48, "deep color"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_ratios() {
        assert!((units::MM_PER_INCH / units::CM_PER_INCH - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolution_keys_unique() {
        for (i, (key, _)) in RESOLUTION_STANDARDS.iter().enumerate() {
            assert!(RESOLUTION_STANDARDS[i + 1..].iter().all(|(k, _)| k != key));
        }
    }

    #[test]
    fn test_limit_arity() {
        assert_eq!(limits::RGB.len(), 3);
        assert_eq!(limits::CMYK.len(), 4);
    }
}
