//! Caption text for captioned cells

use std::path::Path;

use crate::config::CaptionStyle;
use crate::layout::Rect;
use crate::render::canvas::{TextAlign, TextOptions};
use crate::units::to_doc_units;

pub const ELLIPSIS: char = '\u{2026}';

/// Display text for an image: filename without its extension, uppercased
pub fn caption_text(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename)
        .to_uppercase()
}

/// Where and how a caption is drawn within its cell
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionSpec {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub options: TextOptions,
}

impl CaptionSpec {
    /// Place the caption for `filename` in the caption band at the bottom of `cell`
    pub fn for_cell(filename: &str, cell: Rect, style: &CaptionStyle) -> Self {
        let band = to_doc_units(style.caption_band);
        let padding = to_doc_units(style.text_padding);
        let band_top = cell.bottom() - band;

        Self {
            text: caption_text(filename),
            x: cell.x + padding,
            y: band_top + (band - style.font_size) / 2.0 + style.caption_offset,
            options: TextOptions {
                width: (cell.width - padding * 2.0).max(0.0),
                align: TextAlign::Center,
                font_size: style.font_size,
                ellipsis: true,
            },
        }
    }
}

/// Shorten `text` so that `measure` of the result fits in `max_width`,
/// ending it with an ellipsis when anything was cut.
///
/// Returns an empty string when not even the ellipsis fits.
pub fn truncate_to_width<F>(text: &str, max_width: f64, measure: F) -> String
where
    F: Fn(&str) -> f64,
{
    if measure(text) <= max_width {
        return text.to_string();
    }

    let mut kept: Vec<char> = text.chars().collect();
    while !kept.is_empty() {
        kept.pop();
        let mut candidate = kept.iter().collect::<String>().trim_end().to_string();
        candidate.push(ELLIPSIS);
        if measure(&candidate) <= max_width {
            return candidate;
        }
    }

    let ellipsis = ELLIPSIS.to_string();
    if measure(&ellipsis) <= max_width {
        ellipsis
    } else {
        String::new()
    }
}

/// The line actually drawn for `text` and its x offset inside the text box.
///
/// Applies the ellipsis and alignment settings of `options`.
pub fn fit_line<F>(text: &str, options: &TextOptions, measure: F) -> (String, f64)
where
    F: Fn(&str) -> f64,
{
    let line = if options.ellipsis {
        truncate_to_width(text, options.width, &measure)
    } else {
        text.to_string()
    };

    let offset = match options.align {
        TextAlign::Left => 0.0,
        TextAlign::Center => ((options.width - measure(&line)) / 2.0).max(0.0),
    };
    (line, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_char(text: &str) -> f64 {
        text.chars().count() as f64 * 10.0
    }

    #[test]
    fn test_caption_text() {
        assert_eq!(caption_text("my_Photo.JPG"), "MY_PHOTO");
        assert_eq!(caption_text("archive.tar.png"), "ARCHIVE.TAR");
        assert_eq!(caption_text(".hidden.jpeg"), ".HIDDEN");
        assert_eq!(caption_text("noext"), "NOEXT");
    }

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_to_width("ABC", 30.0, per_char), "ABC");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        let out = truncate_to_width("ABCDEFGHIJ", 50.0, per_char);
        assert_eq!(out, "ABCD\u{2026}");
        assert!(per_char(&out) <= 50.0);
    }

    #[test]
    fn test_trailing_space_trimmed_before_ellipsis() {
        let out = truncate_to_width("AB CDEFG", 40.0, per_char);
        assert_eq!(out, "AB\u{2026}");
    }

    #[test]
    fn test_nothing_fits() {
        assert_eq!(truncate_to_width("ABC", 5.0, per_char), "");
        assert_eq!(truncate_to_width("ABC", 10.0, per_char), "\u{2026}");
    }

    #[test]
    fn test_fit_line_centres_and_cuts() {
        let options = TextOptions {
            width: 100.0,
            align: TextAlign::Center,
            font_size: 14.0,
            ellipsis: true,
        };
        assert_eq!(fit_line("ABC", &options, per_char), ("ABC".to_string(), 35.0));

        let (line, offset) = fit_line("ABCDEFGHIJKLMNOP", &options, per_char);
        assert_eq!(line, "ABCDEFGHI\u{2026}");
        assert_eq!(offset, 0.0);

        let left = TextOptions {
            align: TextAlign::Left,
            ellipsis: false,
            ..options
        };
        assert_eq!(
            fit_line("ABCDEFGHIJKLMNOP", &left, per_char),
            ("ABCDEFGHIJKLMNOP".to_string(), 0.0)
        );
    }

    #[test]
    fn test_caption_centred_in_band() {
        let style = CaptionStyle {
            caption_offset: 0.0,
            ..Default::default()
        };
        let cell = Rect::new(10.0, 20.0, 180.0, 300.0);
        let caption = CaptionSpec::for_cell("dog.png", cell, &style);

        let band = to_doc_units(style.caption_band);
        let band_top = cell.bottom() - band;
        let text_mid = caption.y + style.font_size / 2.0;
        assert!((text_mid - (band_top + band / 2.0)).abs() < 1e-9);

        let padding = to_doc_units(style.text_padding);
        assert!((caption.x - (cell.x + padding)).abs() < 1e-9);
        assert!((caption.options.width - (cell.width - 2.0 * padding)).abs() < 1e-9);
        assert_eq!(caption.options.align, TextAlign::Center);
        assert!(caption.options.ellipsis);
        assert_eq!(caption.text, "DOG");
    }
}
