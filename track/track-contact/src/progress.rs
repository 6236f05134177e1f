//! Progress reporting for long-running queries.
//!
//! A [`ProgressSink`] is whatever displays progress: a status bar, a log,
//! a test recorder. [`ProgressBar`] sits in front of one, forwarding a
//! progress value only when its integer part changes, and fans events out
//! to listeners registered for the lifetime of a [`ListenerGuard`].
//!
//! # Example
//!
//! ```
//! use track_contact::{ProgressBar, ProgressEvent, ProgressSink};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Default)]
//! struct Count(usize);
//! impl ProgressSink for Count {
//!     fn progress(&mut self, _percent: f64) {
//!         self.0 += 1;
//!     }
//!     fn label(&mut self, _text: &str) {}
//! }
//!
//! let mut sink = Count::default();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! {
//!     let mut bar = ProgressBar::new(&mut sink).with_steps(4);
//!     let log = Rc::clone(&seen);
//!     let _guard = bar.listen(move |event| {
//!         if let ProgressEvent::Progress(p) = event {
//!             log.borrow_mut().push(p);
//!         }
//!     });
//!     for _ in 0..4 {
//!         bar.increment();
//!     }
//! }
//! assert_eq!(sink.0, 4);
//! assert_eq!(*seen.borrow(), vec![25.0, 50.0, 75.0, 100.0]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Receives progress updates.
pub trait ProgressSink {
    /// Progress in percent, 0 to 100.
    fn progress(&mut self, percent: f64);

    /// Status text.
    fn label(&mut self, text: &str);
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&mut self, _percent: f64) {}
    fn label(&mut self, _text: &str) {}
}

/// An update delivered to listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent<'a> {
    /// A forwarded progress value.
    Progress(f64),
    /// A new status label.
    Label(&'a str),
}

type Listener = Box<dyn FnMut(ProgressEvent<'_>)>;
type Registry = RefCell<Vec<(u64, Listener)>>;

/// Removes its listener from the [`ProgressBar`] when dropped.
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<Registry>,
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            // Dropping a guard from inside a callback leaves the listener registered.
            if let Ok(mut listeners) = registry.try_borrow_mut() {
                listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

/// Progress front end over a [`ProgressSink`].
pub struct ProgressBar<'a> {
    sink: &'a mut dyn ProgressSink,
    value: f64,
    last_whole: Option<i64>,
    increment: f64,
    steps: Option<(usize, usize)>,
    listeners: Rc<Registry>,
    next_id: u64,
}

impl fmt::Debug for ProgressBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("value", &self.value)
            .field("increment", &self.increment)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

impl<'a> ProgressBar<'a> {
    /// Create a bar at 0 with no increment.
    ///
    /// Nothing is sent to the sink until the first update.
    #[must_use]
    pub fn new(sink: &'a mut dyn ProgressSink) -> Self {
        Self {
            sink,
            value: 0.0,
            last_whole: None,
            increment: 0.0,
            steps: None,
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: 0,
        }
    }

    /// Advance by `increment` percent on each [`increment`](Self::increment).
    #[must_use]
    pub fn with_increment(mut self, increment: f64) -> Self {
        self.increment = increment;
        self.steps = None;
        self
    }

    /// Reach 100 after `steps` calls to [`increment`](Self::increment).
    ///
    /// Zero steps makes a single increment jump to 100.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.increment = if steps == 0 { 100.0 } else { 100.0 / steps as f64 };
        self.steps = Some((0, steps));
        self
    }

    /// Current value in percent.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Set the progress value.
    ///
    /// The sink and listeners see the value on the first update and
    /// whenever its integer part differs from the last forwarded value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set(&mut self, value: f64) {
        self.value = value;
        let whole = value.floor() as i64;
        if self.last_whole == Some(whole) {
            return;
        }
        self.last_whole = Some(whole);
        self.sink.progress(value);
        self.notify(ProgressEvent::Progress(value));
    }

    /// Advance by one increment.
    #[allow(clippy::cast_precision_loss)]
    pub fn increment(&mut self) {
        let value = match &mut self.steps {
            Some((done, total)) if *total > 0 => {
                *done += 1;
                *done as f64 * 100.0 / *total as f64
            }
            _ => self.value + self.increment,
        };
        self.set(value);
    }

    /// Set the status label.
    pub fn label(&mut self, text: &str) {
        self.sink.label(text);
        self.notify(ProgressEvent::Label(text));
    }

    /// Register a listener until the returned guard is dropped.
    pub fn listen(&mut self, listener: impl FnMut(ProgressEvent<'_>) + 'static) -> ListenerGuard {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    fn notify(&self, event: ProgressEvent<'_>) {
        if let Ok(mut listeners) = self.listeners.try_borrow_mut() {
            for (_, listener) in listeners.iter_mut() {
                listener(event);
            }
        }
    }
}
