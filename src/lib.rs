//! # Auriga
//!
//! Auriga is a tuning and telemetry console framework for line-following
//! robot controllers. It provides the pieces a small bare-metal car needs
//! to expose its control variables over a text terminal:
//!
//! - **Variable Registry**: fixed tables binding variable names to getter
//!   and setter accessors over an explicit state struct.
//! - **Command Dispatcher**: routes single-letter console verbs to their
//!   handlers and owns the active command session.
//! - **Print/Set/Watch Commands**: inspect a variable once, change it, or
//!   re-render it periodically on the console line until the next
//!   keystroke.
//! - **Car State Model**: the tunable and observed fields of a
//!   line-following car, including the steering servo calibration block.
//! - **Logging**: a file-based logger for debugging and telemetry.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::rc::Rc;
//!
//! use auriga::{
//!     car::{self, state::CarState},
//!     terminal::dispatcher::Dispatcher,
//!     tuning::watch::ManualTimer,
//! };
//!
//! let state = auriga::share(CarState::default());
//! let registry = Rc::new(car::default_registry());
//! let console = auriga::share(RadioConsole::new(radio));
//! let timer = auriga::share(ManualTimer::new());
//!
//! let mut dispatcher = Dispatcher::new(console.clone());
//! car::setup_commands(&mut dispatcher, registry, state, console, timer.clone());
//!
//! // Main loop: feed received lines and bytes to the dispatcher,
//! // fire the timer at its period.
//! dispatcher.execute("s kp 1.25");
//! dispatcher.execute("w x");
//! timer.borrow_mut().fire();
//! dispatcher.send_char(b' ');
//! ```
//!
//! ## Modules
//!
//! - [`terminal`]: Console output seam and command dispatch.
//! - [`tuning`]: Variable registry, print/set/watch commands, watch timer.
//! - [`car`]: Line-following car state and its default registry table.
//! - [`fs`]: Filesystem utilities including logging.

use std::{cell::RefCell, rc::Rc};

/// Console seam and command dispatch module.
///
/// Provides the [`Console`](terminal::console::Console) output trait and
/// the [`Dispatcher`](terminal::dispatcher::Dispatcher) that routes verbs
/// to command handlers.
pub mod terminal;

/// Live-tuning module.
///
/// Contains the variable [`Registry`](tuning::registry::Registry), the
/// print/set/watch command operations, and the periodic
/// [`WatchSession`](tuning::watch::WatchSession).
pub mod tuning;

/// Line-following car model module.
///
/// Provides [`CarState`](car::state::CarState) with the car's tunable and
/// observed fields, the default registry table binding them, and the
/// command wiring for a complete tuning console.
pub mod car;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording telemetry and debug
/// information to a file next to the program.
pub mod fs;

/// Makes an object shareable across the command layer by wrapping it in
/// `Rc` and `RefCell`
pub fn share<T>(t: T) -> Rc<RefCell<T>> { Rc::new(RefCell::new(t)) }
