//! Periodic watch sessions.
//!
//! A watch session re-renders one getter's value in place on the console
//! line at a fixed period, driven by a recurring timer the embedding
//! provides. The session stays the dispatcher's active command until the
//! next received byte, which disarms the timer and returns the terminal
//! to normal command mode.
//!
//! # Timer seam
//!
//! The [`RecurringTimer`] trait is the `begin(callback, period)` /
//! `end()` surface of a hardware interval timer. On a host, or in tests,
//! [`ManualTimer`] stands in: the embedding's main loop calls
//! [`fire`](ManualTimer::fire) at whatever cadence it likes.
//!
//! The refresh callback may run from an interrupt context, so it does
//! exactly one bounded formatted write per invocation; the redraw line is
//! assembled in a fixed-capacity buffer first.

use std::{cell::RefCell, fmt::Write, rc::Rc, time::Duration};

use log::{info, warn};

use crate::terminal::{
    console::SharedConsole,
    dispatcher::{CmdHandler, HandlerFlow},
};

/// Refresh period of an active watch session.
pub const WATCH_PERIOD: Duration = Duration::from_millis(200);

/// Capacity of the redraw buffer. One carriage-return redraw must fit in
/// a single write of at most this many bytes.
const REDRAW_CAPACITY: usize = 32;

/// The recurring-timer surface of the embedding.
///
/// Implementations wrap whatever periodic callback primitive the platform
/// has (a hardware interval timer, a main-loop tick).
pub trait RecurringTimer {
    /// Arms the timer: `callback` runs once per `period` until
    /// [`end`](Self::end). Arming an already armed timer replaces the
    /// previous callback.
    fn begin(&mut self, callback: Box<dyn FnMut()>, period: Duration);

    /// Disarms the timer. Must be idempotent: ending an idle timer is a
    /// no-op.
    fn end(&mut self);
}

/// A timer handle shared between the watch command and its session.
pub type SharedTimer = Rc<RefCell<dyn RecurringTimer>>;

/// Cooperative recurring timer fired from the embedding's loop.
///
/// Stores the armed callback and runs it on every [`fire`](Self::fire)
/// call, standing in for a hardware interval timer.
#[derive(Default)]
pub struct ManualTimer {
    callback: Option<Box<dyn FnMut()>>,
    period:   Duration,
}

impl ManualTimer {
    pub fn new() -> Self { ManualTimer::default() }

    /// Whether a callback is currently armed.
    pub fn is_armed(&self) -> bool { self.callback.is_some() }

    /// The period the current callback was armed with.
    pub fn period(&self) -> Duration { self.period }

    /// Runs the armed callback once, as the hardware timer would at a
    /// period boundary. Does nothing while disarmed.
    pub fn fire(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
    }
}

impl RecurringTimer for ManualTimer {
    fn begin(&mut self, callback: Box<dyn FnMut()>, period: Duration) {
        self.callback = Some(callback);
        self.period = period;
    }

    fn end(&mut self) { self.callback = None; }
}

/// The active watch command.
///
/// Created by a successful `w <var>` lookup. Arms the shared timer with a
/// redraw callback on creation; any byte routed to it disarms the timer
/// and terminates the session. Dropping the session (for instance when a
/// new command supersedes it) also disarms, so the timer can never leak
/// past its session.
pub struct WatchSession {
    timer: SharedTimer,
}

impl WatchSession {
    /// Arms `timer` to re-render `read`'s value every [`WATCH_PERIOD`]
    /// and returns the session holding it.
    pub fn begin<S: 'static>(
        name: &'static str,
        read: fn(&S) -> f64,
        state: Rc<RefCell<S>>,
        console: SharedConsole,
        timer: SharedTimer,
    ) -> Self {
        let callback = move || {
            let mut line: heapless::String<REDRAW_CAPACITY> = heapless::String::new();
            if write!(line, "\r         \r{:.4}", read(&state.borrow())).is_err() {
                // Buffer full: the partial line is still a valid redraw.
                warn!("Watch Redraw Truncated: {}", name);
            }
            console.borrow_mut().write(&line);
        };
        timer.borrow_mut().begin(Box::new(callback), WATCH_PERIOD);
        info!("Watch Started: {}", name);

        WatchSession { timer }
    }
}

impl CmdHandler for WatchSession {
    /// Any byte ends the watch. The byte is consumed, not treated as the
    /// start of a new command.
    fn send_char(&mut self, _c: u8) -> HandlerFlow {
        self.timer.borrow_mut().end();
        HandlerFlow::Terminate
    }
}

impl Drop for WatchSession {
    fn drop(&mut self) {
        self.timer.borrow_mut().end();
        info!("Watch Stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::console::BufferConsole;

    struct TestState {
        value: f64,
    }

    fn session_parts() -> (
        Rc<RefCell<TestState>>,
        Rc<RefCell<BufferConsole>>,
        Rc<RefCell<ManualTimer>>,
    ) {
        (
            crate::share(TestState { value: 1.5 }),
            crate::share(BufferConsole::new()),
            crate::share(ManualTimer::new()),
        )
    }

    fn begin_session(
        state: &Rc<RefCell<TestState>>,
        console: &Rc<RefCell<BufferConsole>>,
        timer: &Rc<RefCell<ManualTimer>>,
    ) -> WatchSession {
        WatchSession::begin(
            "v",
            |s: &TestState| s.value,
            state.clone(),
            console.clone(),
            timer.clone(),
        )
    }

    #[test]
    fn begin_arms_the_timer() {
        let (state, console, timer) = session_parts();
        let _session = begin_session(&state, &console, &timer);

        assert!(timer.borrow().is_armed());
        assert_eq!(timer.borrow().period(), WATCH_PERIOD);
    }

    #[test]
    fn fire_redraws_in_place() {
        let (state, console, timer) = session_parts();
        let _session = begin_session(&state, &console, &timer);

        timer.borrow_mut().fire();
        assert_eq!(console.borrow().contents(), "\r         \r1.5000");

        state.borrow_mut().value = -0.25;
        console.borrow_mut().clear();
        timer.borrow_mut().fire();
        assert_eq!(console.borrow().contents(), "\r         \r-0.2500");
    }

    #[test]
    fn any_byte_disarms_and_terminates() {
        let (state, console, timer) = session_parts();
        let mut session = begin_session(&state, &console, &timer);

        assert!(matches!(session.send_char(b'x'), HandlerFlow::Terminate));
        assert!(!timer.borrow().is_armed());

        // A pending fire after cancellation renders nothing.
        console.borrow_mut().clear();
        timer.borrow_mut().fire();
        assert_eq!(console.borrow().contents(), "");
    }

    #[test]
    fn drop_disarms_the_timer() {
        let (state, console, timer) = session_parts();
        let session = begin_session(&state, &console, &timer);

        assert!(timer.borrow().is_armed());
        drop(session);
        assert!(!timer.borrow().is_armed());
    }

    #[test]
    fn replacement_session_owns_the_timer() {
        let (state, console, timer) = session_parts();
        let first = begin_session(&state, &console, &timer);
        drop(first);

        let _second = begin_session(&state, &console, &timer);
        assert!(timer.borrow().is_armed());

        timer.borrow_mut().fire();
        assert_eq!(console.borrow().contents(), "\r         \r1.5000");
    }
}
