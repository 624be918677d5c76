pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod paginate;
pub mod render;
pub mod run;
pub mod source;
pub mod units;

pub use cli::Mode;
pub use config::{CaptionStyle, LayoutConfig, RunConfig};
pub use error::{ConfigError, ImageLoadError, RenderError, RunError};
pub use layout::{PageGeometry, Rect};
pub use paginate::{paginate, ImageBatch, Paginator, RenderStats};
pub use render::{Canvas, CellRenderer, Decoration, PdfCanvas};
pub use run::{run, RunSummary};
