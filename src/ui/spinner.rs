//! Spinner widget

use std::io::Write;
use std::time::Duration;

use crate::config::{colors, term};

use super::animator::{Animator, Render};
use super::themes::{SpinnerTheme, Theme};

/// Spinner state drawn by the render thread
#[derive(Debug, Clone)]
pub(crate) struct SpinnerFrame {
    theme: Theme,
    frame_index: usize,
    spinner_color: String,
    message: String,
    message_color: String,
    show_message: bool,
}

impl Default for SpinnerFrame {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            frame_index: 0,
            spinner_color: colors::GREEN.to_string(),
            message: String::new(),
            message_color: String::new(),
            show_message: true,
        }
    }
}

impl SpinnerFrame {
    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.frame_index = 0;
    }
}

impl Render for SpinnerFrame {
    fn draw(&self) -> String {
        let mut line = format!(
            "{}{}{}{}",
            term::CARRIAGE_RETURN,
            self.spinner_color,
            self.theme.frame(self.frame_index),
            term::RESET
        );
        if self.show_message {
            line.push_str(&format!(
                " {}{}{}",
                self.message_color,
                self.message,
                term::RESET
            ));
        }
        line
    }

    fn advance(&mut self) {
        self.frame_index = (self.frame_index + 1) % self.theme.frame_count();
    }

    fn reset(&mut self) {
        self.frame_index = 0;
    }
}

/// Animated glyph with an optional message, redrawn in place
///
/// ```no_run
/// use std::time::Duration;
/// use spinix::{Spinner, SpinnerTheme};
///
/// let spinner = Spinner::new()
///     .with_theme(SpinnerTheme::Line)
///     .with_message("Loading...")
///     .with_speed(Duration::from_millis(80));
/// spinner.start();
/// std::thread::sleep(Duration::from_secs(1));
/// spinner.stop();
/// ```
pub struct Spinner {
    animator: Animator<SpinnerFrame>,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    /// Classic dots in green, 100ms per frame, no message
    pub fn new() -> Self {
        Self {
            animator: Animator::new(SpinnerFrame::default()),
        }
    }

    /// Use a theme from the registry
    pub fn with_theme(self, theme: SpinnerTheme) -> Self {
        self.animator.with_state(|s| s.set_theme(theme.into()));
        self
    }

    /// Use caller-supplied frames
    pub fn with_custom_theme(self, theme: Theme) -> Self {
        self.animator.with_state(|s| s.set_theme(theme));
        self
    }

    /// Set the interval between frames
    pub fn with_speed(self, speed: Duration) -> Self {
        self.animator.set_speed(speed);
        self
    }

    /// Set the message and turn message display on
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.set_message(message);
        self
    }

    /// Toggle the message
    pub fn with_show_message(self, show: bool) -> Self {
        self.animator.with_state(|s| s.show_message = show);
        self
    }

    /// Style string written before the message, not validated
    pub fn with_message_color(self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.animator.with_state(|s| s.message_color = color);
        self
    }

    /// Style string written before the glyph, not validated
    pub fn with_spinner_color(self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.animator.with_state(|s| s.spinner_color = color);
        self
    }

    /// Hook run after every stop; see [`Spinner::stop`]
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

    /// Start animating in the background; no-op if already running
    pub fn start(&self) {
        self.animator.start();
    }

    /// Stop animating, erase the line, then run the callback
    ///
    /// The callback runs while the spinner is locked and must not call
    /// `start` or `stop` on this spinner.
    pub fn stop(&self) {
        self.animator.stop();
    }

    /// Whether the spinner is running
    pub fn is_active(&self) -> bool {
        self.animator.is_active()
    }

    /// Replace the message, also while running
    pub fn set_message(&self, message: impl Into<String>) {
        let message = message.into();
        self.animator.with_state(|s| {
            s.message = message;
            s.show_message = true;
        });
    }

    /// Register the hook run after every stop
    pub fn set_callback<F>(&self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.animator.set_callback(callback);
    }

    /// Interval between frames
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
    fn test_spinner_defaults() {
        let spinner = Spinner::new();
        assert_eq!(spinner.speed(), Duration::from_millis(100));
        assert!(!spinner.is_active());
        spinner.animator.with_state(|s| {
            assert_eq!(s.spinner_color, "\x1b[32m");
            assert!(s.show_message);
            assert_eq!(s.theme, Theme::from(SpinnerTheme::ClassicDots));
            assert_eq!(s.frame_index, 0);
        });
    }

    #[test]
    fn test_frame_cycling_wraps() {
        let mut frame = SpinnerFrame::default();
        frame.set_theme(Theme::new(["a", "b", "c", "d"]).unwrap());
        for _ in 0..5 {
            frame.advance();
        }
        assert_eq!(frame.frame_index, 1);
    }

    #[test]
    fn test_draw_with_message() {
        let mut frame = SpinnerFrame::default();
        frame.set_theme(SpinnerTheme::Line.into());
        frame.message = "Loading".to_string();
        frame.message_color = "\x1b[34m".to_string();
        assert_eq!(frame.draw(), "\r\x1b[32m-\x1b[0m \x1b[34mLoading\x1b[0m");
    }

    #[test]
    fn test_draw_without_message() {
        let mut frame = SpinnerFrame::default();
        frame.set_theme(SpinnerTheme::Line.into());
        frame.show_message = false;
        assert_eq!(frame.draw(), "\r\x1b[32m-\x1b[0m");
    }

    #[test]
    fn test_theme_change_resets_index() {
        let mut frame = SpinnerFrame::default();
        frame.advance();
        frame.advance();
        frame.set_theme(SpinnerTheme::Earth.into());
        assert_eq!(frame.frame_index, 0);
    }

    #[test]
    fn test_builder_chain() {
        let spinner = Spinner::new()
            .with_theme(SpinnerTheme::Triangle)
            .with_message("Working")
            .with_message_color("\x1b[34m")
            .with_spinner_color("\x1b[31m")
            .with_speed(Duration::from_millis(20));

        assert_eq!(spinner.speed(), Duration::from_millis(20));
        spinner.animator.with_state(|s| {
            assert_eq!(s.message, "Working");
            assert_eq!(s.message_color, "\x1b[34m");
            assert_eq!(s.spinner_color, "\x1b[31m");
            assert_eq!(s.theme.frame(0), "◢");
        });
    }

    #[test]
    fn test_with_message_enables_display() {
        let spinner = Spinner::new().with_show_message(false).with_message("x");
        assert!(spinner.animator.with_state(|s| s.show_message));
    }

    #[test]
    fn test_run_renders_frames_and_clears_line() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::new()
            .with_theme(SpinnerTheme::Line)
            .with_message("Working")
            .with_speed(Duration::from_millis(10))
            .with_writer(buffer.clone());

        spinner.start();
        assert!(spinner.is_active());
        thread::sleep(Duration::from_millis(60));
        spinner.stop();
        assert!(!spinner.is_active());

        let output = buffer.contents();
        assert!(output.starts_with("\r\x1b[32m-\x1b[0m Working"));
        assert!(output.contains("\r\x1b[32m\\\x1b[0m"));
        assert!(output.ends_with("\r\x1b[K"));
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_reset_returns_to_first_frame() {
        let mut frame = SpinnerFrame::default();
        frame.advance();
        frame.advance();
        frame.reset();
        assert_eq!(frame.frame_index, 0);
    }

    #[test]
    fn test_callback_invoked_once_per_stop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let spinner = Spinner::new()
            .with_writer(SharedBuffer::default())
            .with_callback(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        spinner.stop();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        spinner.start();
        spinner.stop();
        spinner.stop();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_message_while_running() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::new()
            .with_speed(Duration::from_millis(10))
            .with_writer(buffer.clone());
        spinner.start();
        spinner.set_message("Halfway");
        thread::sleep(Duration::from_millis(40));
        spinner.stop();
        assert!(buffer.contents().contains("Halfway"));
    }
}
