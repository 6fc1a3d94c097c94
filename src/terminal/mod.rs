//! Console seam and command dispatch.
//!
//! This module provides the pieces between the transport link (radio or
//! serial, owned by the embedding) and the tuning commands:
//!
//! - **Console output**: the [`Console`](console::Console) trait wraps the
//!   transport's `write(text)` so commands never touch the link directly.
//! - **Command dispatch**: the [`Dispatcher`](dispatcher::Dispatcher)
//!   routes the first token of each received line to a registered handler
//!   and forwards raw bytes to the active command session, if any.
//!
//! # Example
//!
//! ```ignore
//! use auriga::terminal::dispatcher::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new(console);
//! dispatcher.add_command("p", print_handler);
//!
//! // From the transport's receive path:
//! dispatcher.execute("p kp");
//! ```

/// Console output seam.
///
/// Provides the [`Console`](console::Console) trait along with the
/// [`BufferConsole`](console::BufferConsole) and
/// [`StdoutConsole`](console::StdoutConsole) implementations.
pub mod console;

/// Verb-to-handler command routing.
///
/// Provides the [`Dispatcher`](dispatcher::Dispatcher) and the
/// [`CmdHandler`](dispatcher::CmdHandler) trait for commands that stay
/// active after their line is executed.
pub mod dispatcher;
