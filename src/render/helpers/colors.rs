use printpdf::Rgb;

/// Standard colors
pub const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

/// Placeholder marks for images that could not be drawn
pub const RED: Rgb = Rgb {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};
