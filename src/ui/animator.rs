//! Start/stop lifecycle shared by every single-line animated widget
//!
//! An [`Animator`] owns the widget state behind one mutex, a detached render
//! thread and a cancellation token. Widgets plug in their per-frame output by
//! implementing [`Render`].

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use log::{debug, error, trace};

use crate::config::{defaults, term};

/// Per-frame behavior of an animated widget
pub trait Render: Send + 'static {
    /// Build the complete line for the current state, leading `\r` included
    fn draw(&self) -> String;

    /// Step the animation after a frame has been shown
    fn advance(&mut self) {}

    /// Reset per-run animation state when a new run begins
    fn reset(&mut self) {}
}

/// Hook invoked after a widget has stopped
pub type Callback = Box<dyn FnMut() + Send>;

/// Destination of rendered frames
pub type Sink = Box<dyn Write + Send>;

/// One-shot cancellation flag handed to a single render thread
#[derive(Debug, Clone, Default)]
struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

struct Shared<R> {
    render: R,
    speed: Duration,
    active: bool,
    token: CancelToken,
    callback: Option<Callback>,
    sink: Sink,
}

impl<R> Shared<R> {
    /// Console writes are assumed to succeed; failures are only logged
    fn write(&mut self, text: &str) {
        let result = self
            .sink
            .write_all(text.as_bytes())
            .and_then(|_| self.sink.flush());
        if let Err(e) = result {
            debug!("Failed to write frame: {}", e);
        }
    }
}

/// Lock the state, recovering it if a callback panicked while holding it
fn lock<R>(shared: &Mutex<Shared<R>>) -> MutexGuard<'_, Shared<R>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Generic animated line renderer
pub struct Animator<R: Render> {
    shared: Arc<Mutex<Shared<R>>>,
    live: Arc<AtomicUsize>,
}

impl<R: Render> Animator<R> {
    /// Create an idle animator drawing to stdout
    pub fn new(render: R) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                render,
                speed: Duration::from_millis(defaults::SPEED_MS),
                active: false,
                token: CancelToken::default(),
                callback: None,
                sink: Box::new(io::stdout()),
            })),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Begin rendering on a background thread
    ///
    /// Returns immediately. Calling it on a running animator does nothing.
    pub fn start(&self) {
        let mut state = lock(&self.shared);
        if state.active {
            return;
        }
        state.active = true;
        state.render.reset();

        let shared = Arc::clone(&self.shared);
        let token = state.token.clone();
        let live = Arc::clone(&self.live);
        self.live.fetch_add(1, Ordering::SeqCst);

        let spawned = thread::Builder::new()
            .name("spinix-render".to_string())
            .spawn(move || render_loop(shared, token, live));

        match spawned {
            Ok(_) => debug!("Render thread started (speed {:?})", state.speed),
            Err(e) => {
                error!("Failed to spawn render thread: {}", e);
                self.live.fetch_sub(1, Ordering::SeqCst);
                state.active = false;
            }
        }
    }

    /// Stop rendering and erase the line
    ///
    /// No frame is written after this returns, although the render thread
    /// may still be sleeping for up to one frame interval before it exits.
    /// The registered callback runs on the calling thread while the state
    /// lock is held, so it must not call `start` or `stop` on the same
    /// widget. Calling it on an idle animator does nothing.
    pub fn stop(&self) {
        let mut state = lock(&self.shared);
        if !state.active {
            return;
        }
        state.token.cancel();
        state.token = CancelToken::default();
        state.active = false;
        state.write(term::CLEAR_LINE);
        debug!(
            "Render thread cancelled ({} not yet exited)",
            self.live_renderers()
        );

        if let Some(callback) = state.callback.as_mut() {
            callback();
        }
    }

    /// Whether a run is in progress
    pub fn is_active(&self) -> bool {
        lock(&self.shared).active
    }

    /// Run `f` against the widget state under the lock
    pub fn with_state<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut lock(&self.shared).render)
    }

    /// Interval between two redraws
    pub fn speed(&self) -> Duration {
        lock(&self.shared).speed
    }

    /// Set the interval between two redraws
    pub fn set_speed(&self, speed: Duration) {
        lock(&self.shared).speed = speed;
    }

    /// Register the hook run after each stop, replacing any previous one
    pub fn set_callback<F>(&self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        lock(&self.shared).callback = Some(Box::new(callback));
    }

    /// Redirect frames to another writer
    pub fn set_sink<W>(&self, sink: W)
    where
        W: Write + Send + 'static,
    {
        lock(&self.shared).sink = Box::new(sink);
    }

    /// Number of render threads that have not exited yet
    pub(crate) fn live_renderers(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl<R: Render> Drop for Animator<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Decrements the live-thread counter when the render thread ends, panics included
struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
        trace!("Render thread exited");
    }
}

fn render_loop<R: Render>(
    shared: Arc<Mutex<Shared<R>>>,
    token: CancelToken,
    live: Arc<AtomicUsize>,
) {
    let _live = LiveGuard(live);
    loop {
        let speed = {
            let mut state = lock(&shared);
            if token.is_cancelled() {
                break;
            }
            let line = state.render.draw();
            state.write(&line);
            state.speed
        };

        // Sleep outside the lock so stop() and setters never wait on it
        thread::sleep(speed);

        let mut state = lock(&shared);
        if token.is_cancelled() {
            break;
        }
        state.render.advance();
    }
}
