//! Console output seam for the tuning terminal.
//!
//! Commands and the watch refresh never write to the transport link
//! directly; they go through the [`Console`] trait. The embedding wraps
//! its radio or serial link in an implementation and shares it across the
//! command layer as a [`SharedConsole`].

use std::{
    cell::RefCell,
    io::{Write, stdout},
    rc::Rc,
};

/// Text sink for everything the command layer produces.
///
/// A write carries one already-formatted piece of output. Implementations
/// must not add framing of their own: the watch refresh relies on its
/// single write reaching the terminal unbroken.
pub trait Console {
    /// Writes `text` to the terminal.
    fn write(&mut self, text: &str);
}

/// A console handle shared between the dispatcher, the command handlers,
/// and the watch refresh.
pub type SharedConsole = Rc<RefCell<dyn Console>>;

/// In-memory console that accumulates everything written to it.
///
/// Used by tests and scripted demo sessions to observe command output.
///
/// # Example
///
/// ```
/// use auriga::terminal::console::{BufferConsole, Console};
///
/// let mut console = BufferConsole::new();
/// console.write("kp = 1.2500");
/// assert_eq!(console.contents(), "kp = 1.2500");
/// ```
#[derive(Default)]
pub struct BufferConsole {
    contents: String,
}

impl BufferConsole {
    pub fn new() -> Self { BufferConsole::default() }

    /// Everything written since creation (or the last [`clear`](Self::clear)).
    pub fn contents(&self) -> &str { &self.contents }

    /// Discards the accumulated output.
    pub fn clear(&mut self) { self.contents.clear(); }
}

impl Console for BufferConsole {
    fn write(&mut self, text: &str) { self.contents.push_str(text); }
}

/// Console that writes to the process's standard output.
///
/// Flushes after every write so carriage-return redraws show up
/// immediately. Useful when running the tuning console on a host.
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write(&mut self, text: &str) {
        print!("{}", text);
        let _ = stdout().flush();
    }
}
