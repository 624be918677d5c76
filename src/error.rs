use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Grid must have at least one {0}")]
    EmptyGrid(&'static str),

    #[error("Invalid {name}: {value} mm (must be greater than zero)")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Invalid {name}: {value} mm (must not be negative)")]
    Negative { name: &'static str, value: f64 },
}

/// Why a single image could not be placed on the page.
///
/// Never escapes the cell it belongs to; the renderer draws a placeholder instead.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {message}")]
    Decode { path: PathBuf, message: String },
}

impl ImageLoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ImageLoadError::Read { path, .. } | ImageLoadError::Decode { path, .. } => path,
        }
    }
}

/// Reasons a run stops before any page is drawn.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Created image directory {}. Add images to this folder and run again.", .0.display())]
    ImageDirCreated(PathBuf),

    #[error("No images found in {}. Please add images and run again.", .0.display())]
    NoImages(PathBuf),

    #[error("Caption font not found: {}", .0.display())]
    MissingFont(PathBuf),

    #[error("Background image not found: {}", .0.display())]
    MissingBackground(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunError {
    /// The run stopped because setup was just done for the user, not because
    /// anything went wrong. Exits successfully.
    pub fn is_setup_required(&self) -> bool {
        matches!(self, RunError::ImageDirCreated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_created_dir_is_setup() {
        let dir = PathBuf::from("images");
        assert!(RunError::ImageDirCreated(dir.clone()).is_setup_required());
        assert!(!RunError::NoImages(dir.clone()).is_setup_required());
        assert!(!RunError::MissingFont(PathBuf::from("font.ttf")).is_setup_required());
        assert!(!RunError::MissingBackground(PathBuf::from("bg.png")).is_setup_required());
        assert!(!RunError::from(ConfigError::EmptyGrid("row")).is_setup_required());
    }
}
