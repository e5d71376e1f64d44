//! Output formatting module
//!
//! Lists spinner themes and progress bar styles as table, CSV or JSON

mod common;
mod styles;
mod themes;

pub use common::escape_csv;
pub use styles::output_styles;
pub use themes::output_themes;
