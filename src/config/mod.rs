//! Run configuration: defaults and validated settings

pub mod defaults;
pub mod settings;

pub use settings::{CaptionStyle, LayoutConfig, RunConfig};
