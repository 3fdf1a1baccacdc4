//! Value Debouncer
//!
//! Produces a settled copy of a rapidly changing value. A new input restarts the
//! delay; only the latest input survives. Timers come from a [`TimerHost`] so the
//! same state machine runs on `gloo-timers` in the browser and on a virtual clock
//! in tests.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Schedules single-shot callbacks. Dropping the returned handle cancels the timer.
pub trait TimerHost {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers backed by `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

type Listener<T> = Rc<dyn Fn(&T)>;

struct Settled<T> {
    value: T,
    pending: bool,
    listener: Option<Listener<T>>,
}

/// Debounces values of type `T`
pub struct Debouncer<T, H: TimerHost> {
    host: H,
    delay_ms: u32,
    /// Latest value passed to `set`
    input: T,
    settled: Rc<RefCell<Settled<T>>>,
    /// Dropped to cancel
    timer: Option<H::Handle>,
}

impl<T, H> Debouncer<T, H>
where
    T: Clone + PartialEq + 'static,
    H: TimerHost,
{
    /// The initial value is produced immediately, without waiting for the delay.
    pub fn new(initial: T, delay_ms: u32, host: H) -> Self {
        Self {
            host,
            delay_ms,
            input: initial.clone(),
            settled: Rc::new(RefCell::new(Settled {
                value: initial,
                pending: false,
                listener: None,
            })),
            timer: None,
        }
    }

    /// Current settled value
    pub fn value(&self) -> T {
        self.settled.borrow().value.clone()
    }

    /// Latest input, settled or not
    pub fn input(&self) -> &T {
        &self.input
    }

    /// Whether a timer is waiting to settle the latest input
    pub fn is_pending(&self) -> bool {
        self.settled.borrow().pending
    }

    /// Register the callback run each time a value settles
    pub fn on_settle(&mut self, listener: impl Fn(&T) + 'static) {
        self.settled.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Feed a new input and restart the delay
    pub fn set(&mut self, value: T) {
        if value == self.input && (self.is_pending() || self.settled.borrow().value == value) {
            return;
        }
        self.input = value.clone();
        self.cancel();
        self.settled.borrow_mut().pending = true;

        let settled = Rc::downgrade(&self.settled);
        let callback = Box::new(move || {
            if let Some(settled) = settled.upgrade() {
                settle(&settled, value);
            }
        });
        self.timer = Some(self.host.schedule(self.delay_ms, callback));
    }

    /// Takes effect on the next `set`, a running timer keeps its delay.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_delay(&mut self, delay_ms: u32) {
        self.delay_ms = delay_ms;
    }

    /// Drop the pending timer, if any
    pub fn cancel(&mut self) {
        self.timer = None;
        self.settled.borrow_mut().pending = false;
    }
}

fn settle<T: Clone>(settled: &RefCell<Settled<T>>, value: T) {
    let listener = {
        let mut state = settled.borrow_mut();
        state.value = value.clone();
        state.pending = false;
        state.listener.clone()
    };
    if let Some(listener) = listener {
        listener(&value);
    }
}

#[cfg(test)]
pub use manual::ManualTimers;
