//! Progress bar widget

use std::io::Write;
use std::time::Duration;

use log::debug;

use crate::config::{colors, defaults, term};

use super::animator::{Animator, Render};
use super::styles::BarStyle;

/// Split `width` cells into filled and empty parts for `progress` percent
///
/// The filled part is clamped to `[0, width]`, so out-of-range progress
/// values still draw a bar of the configured width.
pub fn fill_widths(width: usize, progress: i32) -> (usize, usize) {
    let fill = (width as i128 * i128::from(progress) / 100).clamp(0, width as i128) as usize;
    (fill, width - fill)
}

/// Progress bar state drawn by the render thread
#[derive(Debug, Clone)]
pub(crate) struct BarFrame {
    width: usize,
    progress: i32,
    bar_char: String,
    empty_char: String,
    left_border: String,
    right_border: String,
    color: String,
    label: String,
    show_label: bool,
    show_percentage: bool,
}

impl Default for BarFrame {
    fn default() -> Self {
        Self {
            width: defaults::BAR_WIDTH,
            progress: 0,
            bar_char: defaults::BAR_CHAR.to_string(),
            empty_char: defaults::EMPTY_CHAR.to_string(),
            left_border: defaults::LEFT_BORDER.to_string(),
            right_border: defaults::RIGHT_BORDER.to_string(),
            color: colors::GREEN.to_string(),
            label: String::new(),
            show_label: false,
            show_percentage: true,
        }
    }
}

impl BarFrame {
    fn apply_style(&mut self, style: BarStyle) {
        let preset = style.preset();
        self.width = preset.width;
        self.bar_char = preset.bar_char.to_string();
        self.empty_char = preset.empty_char.to_string();
        self.left_border = preset.left_border.to_string();
        self.right_border = preset.right_border.to_string();
        self.color = preset.color.to_string();
    }

    /// Store `progress` if the current value is within 0..=100
    fn update(&mut self, progress: i32) -> bool {
        if (0..=100).contains(&self.progress) {
            self.progress = progress;
            true
        } else {
            debug!(
                "Ignoring progress update to {}, stored value {} is out of range",
                progress, self.progress
            );
            false
        }
    }
}

impl Render for BarFrame {
    fn draw(&self) -> String {
        let (fill, empty) = fill_widths(self.width, self.progress);
        let mut line = format!(
            "{}{}{}{}{}{}{}",
            term::CARRIAGE_RETURN,
            self.color,
            self.left_border,
            self.bar_char.repeat(fill),
            self.empty_char.repeat(empty),
            self.right_border,
            term::RESET
        );
        if self.show_percentage {
            line.push_str(&format!(" {:>3}%", self.progress));
        }
        if self.show_label {
            line.push_str(&format!(" {}", self.label));
        }
        line
    }
}

/// Bar of configurable width showing an externally driven percentage
///
/// ```no_run
/// use spinix::{BarStyle, ProgressBar};
///
/// let bar = ProgressBar::new().with_style(BarStyle::Classic).with_label("Copying");
/// bar.start();
/// for p in 0..=100 {
///     bar.update(p);
///     std::thread::sleep(std::time::Duration::from_millis(20));
/// }
/// bar.stop();
/// ```
pub struct ProgressBar {
    animator: Animator<BarFrame>,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    /// 40 cells of `█` between `[` and `]` in green, percentage shown
    pub fn new() -> Self {
        Self {
            animator: Animator::new(BarFrame::default()),
        }
    }

    /// Apply a preset, overwriting width, characters, borders and color
    pub fn with_style(self, style: BarStyle) -> Self {
        self.animator.with_state(|b| b.apply_style(style));
        self
    }

    /// Set the number of cells between the borders
    pub fn with_width(self, width: usize) -> Self {
        self.animator.with_state(|b| b.width = width);
        self
    }

    /// Set the filled cell
    pub fn with_bar_char(self, bar_char: impl Into<String>) -> Self {
        let bar_char = bar_char.into();
        self.animator.with_state(|b| b.bar_char = bar_char);
        self
    }

    /// Set the empty cell
    pub fn with_empty_char(self, empty_char: impl Into<String>) -> Self {
        let empty_char = empty_char.into();
        self.animator.with_state(|b| b.empty_char = empty_char);
        self
    }

    /// Set the left and right borders
    pub fn with_borders(self, left: impl Into<String>, right: impl Into<String>) -> Self {
        let (left, right) = (left.into(), right.into());
        self.animator.with_state(|b| {
            b.left_border = left;
            b.right_border = right;
        });
        self
    }

    /// Style string written before the bar, not validated
    pub fn with_color(self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.animator.with_state(|b| b.color = color);
        self
    }

    /// Set the label and turn label display on
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Toggle the label
    pub fn with_show_label(self, show: bool) -> Self {
        self.animator.with_state(|b| b.show_label = show);
        self
    }

    /// Toggle the percentage
    pub fn with_show_percentage(self, show: bool) -> Self {
        self.animator.with_state(|b| b.show_percentage = show);
        self
    }

    /// Set the interval between redraws
    pub fn with_speed(self, speed: Duration) -> Self {
        self.animator.set_speed(speed);
        self
    }

    /// Hook run after every stop; see [`ProgressBar::stop`]
    pub fn with_callback<F>(self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.animator.set_callback(callback);
        self
    }

    /// Draw to `writer` instead of stdout
    pub fn with_writer<W>(self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.animator.set_sink(writer);
        self
    }

    /// Start rendering in the background; no-op if already running
    pub fn start(&self) {
        self.animator.start();
    }

    /// Stop animating, erase the line, then run the callback
    ///
    /// The callback runs while the bar is locked and must not call `start`
    /// or `stop` on this bar.
    pub fn stop(&self) {
        self.animator.stop();
    }

    /// Whether the bar is running
    pub fn is_active(&self) -> bool {
        self.animator.is_active()
    }

    /// Set the progress percentage, callable from any thread
    ///
    /// The range check applies to the value already stored, not to
    /// `progress`: any value is accepted while the stored one is within
    /// 0..=100, and every update is refused once it has left that range.
    /// Returns whether the value was stored.
    pub fn update(&self, progress: i32) -> bool {
        self.animator.with_state(|b| b.update(progress))
    }

    /// Currently stored progress value
    pub fn progress(&self) -> i32 {
        self.animator.with_state(|b| b.progress)
    }

    /// Replace the label, also while running
    pub fn set_label(&self, label: impl Into<String>) {
        let label = label.into();
        self.animator.with_state(|b| {
            b.label = label;
            b.show_label = true;
        });
    }

    /// Register the hook run after every stop
    pub fn set_callback<F>(&self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.animator.set_callback(callback);
    }

    /// Interval between redraws
    pub fn speed(&self) -> Duration {
        self.animator.speed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::SharedBuffer;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_progress_bar_defaults() {
        let bar = ProgressBar::new();
        assert_eq!(bar.speed(), Duration::from_millis(100));
        assert_eq!(bar.progress(), 0);
        assert!(!bar.is_active());
        bar.animator.with_state(|b| {
            assert_eq!(b.width, 40);
            assert_eq!(b.bar_char, "█");
            assert_eq!(b.empty_char, " ");
            assert_eq!(b.left_border, "[");
            assert_eq!(b.right_border, "]");
            assert_eq!(b.color, "\x1b[32m");
            assert!(b.show_percentage);
            assert!(!b.show_label);
        });
    }

    #[test]
    fn test_fill_widths_half() {
        assert_eq!(fill_widths(40, 50), (20, 20));
    }

    #[test]
    fn test_fill_widths_empty() {
        assert_eq!(fill_widths(40, 0), (0, 40));
    }

    #[test]
    fn test_fill_widths_full() {
        assert_eq!(fill_widths(40, 100), (40, 0));
    }

    #[test]
    fn test_fill_widths_rounds_down() {
        assert_eq!(fill_widths(30, 33), (9, 21));
    }

    #[test]
    fn test_fill_widths_clamped_out_of_range() {
        assert_eq!(fill_widths(40, 150), (40, 0));
        assert_eq!(fill_widths(40, -5), (0, 40));
    }

    #[test]
    fn test_fill_widths_huge_width() {
        assert_eq!(
            fill_widths(usize::MAX, 50),
            (usize::MAX / 2, usize::MAX - usize::MAX / 2)
        );
        assert_eq!(fill_widths(1 << 60, 100), (1 << 60, 0));
        assert_eq!(fill_widths(usize::MAX, 150), (usize::MAX, 0));
        assert_eq!(fill_widths(usize::MAX, -5), (0, usize::MAX));
    }

    #[test]
    fn test_update_in_range() {
        let bar = ProgressBar::new();
        assert!(bar.update(50));
        assert_eq!(bar.progress(), 50);
    }

    #[test]
    fn test_update_checks_stored_value_not_incoming() {
        let bar = ProgressBar::new();
        assert!(bar.update(150));
        assert_eq!(bar.progress(), 150);

        assert!(!bar.update(50));
        assert_eq!(bar.progress(), 150);
    }

    #[test]
    fn test_update_accepts_negative_from_zero() {
        let bar = ProgressBar::new();
        assert!(bar.update(-5));
        assert_eq!(bar.progress(), -5);
        assert!(!bar.update(10));
    }

    #[test]
    fn test_draw_default_bar() {
        let mut frame = BarFrame {
            width: 10,
            ..BarFrame::default()
        };
        frame.update(50);
        assert_eq!(frame.draw(), "\r\x1b[32m[█████     ]\x1b[0m  50%");
    }

    #[test]
    fn test_draw_with_label_no_percentage() {
        let mut frame = BarFrame::default();
        frame.apply_style(BarStyle::Minimal);
        frame.width = 4;
        frame.show_percentage = false;
        frame.label = "files".to_string();
        frame.show_label = true;
        frame.update(100);
        assert_eq!(frame.draw(), "\r\x1b[36m****\x1b[0m files");
    }

    #[test]
    fn test_draw_out_of_range_keeps_width() {
        let mut frame = BarFrame {
            width: 4,
            ..BarFrame::default()
        };
        frame.update(150);
        assert_eq!(frame.draw(), "\r\x1b[32m[████]\x1b[0m 150%");
    }

    #[test]
    fn test_style_then_override_keeps_other_fields() {
        let bar = ProgressBar::new()
            .with_style(BarStyle::Dashed)
            .with_width(10);
        bar.animator.with_state(|b| {
            assert_eq!(b.width, 10);
            assert_eq!(b.bar_char, "▮");
            assert_eq!(b.empty_char, "▯");
            assert_eq!(b.left_border, "[");
            assert_eq!(b.right_border, "]");
            assert_eq!(b.color, "\x1b[31m");
        });
    }

    #[test]
    fn test_style_overwrites_earlier_setters() {
        let bar = ProgressBar::new()
            .with_width(10)
            .with_bar_char("x")
            .with_style(BarStyle::Classic);
        bar.animator.with_state(|b| {
            assert_eq!(b.width, 30);
            assert_eq!(b.bar_char, "#");
        });
    }

    #[test]
    fn test_with_label_enables_display() {
        let bar = ProgressBar::new().with_label("Uploading");
        bar.animator.with_state(|b| {
            assert!(b.show_label);
            assert_eq!(b.label, "Uploading");
        });
    }

    #[test]
    fn test_update_from_other_thread_is_rendered() {
        let buffer = SharedBuffer::default();
        let bar = Arc::new(
            ProgressBar::new()
                .with_width(10)
                .with_speed(Duration::from_millis(10))
                .with_writer(buffer.clone()),
        );
        bar.start();

        let worker = {
            let bar = Arc::clone(&bar);
            thread::spawn(move || {
                bar.update(70);
            })
        };
        worker.join().unwrap();
        thread::sleep(Duration::from_millis(50));
        bar.stop();

        let output = buffer.contents();
        assert!(output.contains("[███████   ]\x1b[0m  70%"));
        assert!(output.ends_with("\r\x1b[K"));
    }

    #[test]
    fn test_callback_invoked_after_stop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let bar = ProgressBar::new()
            .with_writer(SharedBuffer::default())
            .with_callback(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        bar.start();
        bar.stop();
        assert!(!bar.is_active());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
