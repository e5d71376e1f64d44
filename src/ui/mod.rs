//! Terminal widgets
//!
//! Spinners and progress bars that redraw a single console line in place
//! from a background thread while the caller keeps working.

mod animator;
mod color;
mod progress;
mod spinner;
mod styles;
mod themes;

#[cfg(test)]
pub(crate) mod test_support;

pub use animator::{Animator, Callback, Render, Sink};
pub use color::Color;
pub use progress::{fill_widths, ProgressBar};
pub use spinner::Spinner;
pub use styles::{BarPreset, BarStyle};
pub use themes::{SpinnerTheme, Theme};
