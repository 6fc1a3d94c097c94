//! Verb-to-handler command routing.
//!
//! The dispatcher owns the table of registered commands and the single
//! active command session. The transport feeds it complete lines through
//! [`execute`](Dispatcher::execute) and raw bytes through
//! [`send_char`](Dispatcher::send_char); the dispatcher strips the leading
//! verb from each line and passes the remainder to the matching handler.
//!
//! Most commands finish within their handler and return no session. A
//! command that stays active (watch) returns a [`CmdHandler`]; while one
//! is held, every received byte goes to it instead of the line editor,
//! and the session decides when to hand control back.

use log::warn;

use crate::terminal::console::SharedConsole;

/// What an active session wants the dispatcher to do after a byte.
pub enum HandlerFlow {
    /// Keep the session active; keep routing bytes to it.
    Continue,
    /// Drop the session and return to normal command mode.
    Terminate,
}

/// An active command session.
///
/// Returned by a command handler that needs to keep running after its
/// line was executed. The dispatcher routes every received byte to the
/// session until it asks to terminate; the bytes are consumed and never
/// reprocessed as command input.
pub trait CmdHandler {
    /// Handles one raw input byte while this session is active.
    fn send_char(&mut self, c: u8) -> HandlerFlow;
}

/// A registered command handler.
///
/// Receives the line remainder after the verb and optionally returns the
/// session that should stay active.
pub type CommandFn = Box<dyn Fn(&str) -> Option<Box<dyn CmdHandler>>>;

/// Routes console command lines to their registered handlers.
///
/// The command table is filled once during setup with
/// [`add_command`](Self::add_command) and is not meant to change
/// afterwards.
///
/// # Example
///
/// ```
/// use auriga::terminal::{console::BufferConsole, dispatcher::Dispatcher};
///
/// let console = auriga::share(BufferConsole::new());
/// let mut dispatcher = Dispatcher::new(console.clone());
/// dispatcher.add_command("e", Box::new(|args| {
///     println!("echo: {}", args);
///     None
/// }));
/// dispatcher.execute("e hello");
/// ```
pub struct Dispatcher {
    commands: Vec<(&'static str, CommandFn)>,
    active:   Option<Box<dyn CmdHandler>>,
    console:  SharedConsole,
}

impl Dispatcher {
    pub fn new(console: SharedConsole) -> Self {
        Dispatcher {
            commands: Vec::new(),
            active: None,
            console,
        }
    }

    /// Registers `handler` under `verb`.
    ///
    /// A verb that is already taken is skipped with a warning; the first
    /// registration wins.
    pub fn add_command(&mut self, verb: &'static str, handler: CommandFn) {
        if self.commands.iter().any(|(v, _)| *v == verb) {
            warn!("Duplicate Command Registration Skipped: {}", verb);
            return;
        }
        self.commands.push((verb, handler));
    }

    /// Executes one received command line.
    ///
    /// The first whitespace-delimited token is the verb; the matching
    /// handler gets the remainder of the line. An unknown verb produces a
    /// one-line console message. Executing a line supersedes whatever
    /// session was still active: the old session is dropped before the
    /// new verb is dispatched.
    pub fn execute(&mut self, line: &str) {
        self.active = None;

        let line = line.trim();
        let (verb, args) = match line.split_once(char::is_whitespace) {
            Some((verb, args)) => (verb, args),
            None => (line, ""),
        };
        if verb.is_empty() {
            return;
        }

        match self.commands.iter().find(|(v, _)| *v == verb) {
            Some((_, handler)) => self.active = handler(args),
            None => {
                warn!("Unknown Command: {}", verb);
                self.console
                    .borrow_mut()
                    .write(&format!("Unknown command: {}", verb));
            }
        }
    }

    /// Routes one raw input byte to the active session.
    ///
    /// Returns `true` if a session consumed the byte. Returns `false`
    /// when no session is active, in which case the byte belongs to the
    /// transport's normal line editing.
    pub fn send_char(&mut self, c: u8) -> bool {
        let Some(session) = self.active.as_mut() else {
            return false;
        };
        if let HandlerFlow::Terminate = session.send_char(c) {
            self.active = None;
        }
        true
    }

    /// Whether a command session is currently active.
    pub fn has_active_session(&self) -> bool { self.active.is_some() }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::terminal::console::BufferConsole;

    struct CountingSession {
        bytes: Rc<RefCell<Vec<u8>>>,
    }

    impl CmdHandler for CountingSession {
        fn send_char(&mut self, c: u8) -> HandlerFlow {
            self.bytes.borrow_mut().push(c);
            HandlerFlow::Terminate
        }
    }

    fn dispatcher_with_console() -> (Dispatcher, Rc<RefCell<BufferConsole>>) {
        let console = crate::share(BufferConsole::new());
        (Dispatcher::new(console.clone()), console)
    }

    #[test]
    fn routes_verb_with_remainder() {
        let (mut dispatcher, _console) = dispatcher_with_console();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_by_handler = seen.clone();
        dispatcher.add_command(
            "p",
            Box::new(move |args| {
                seen_by_handler.borrow_mut().push(args.to_string());
                None
            }),
        );

        dispatcher.execute("p kp");
        dispatcher.execute("p");
        assert_eq!(*seen.borrow(), vec!["kp".to_string(), "".to_string()]);
    }

    #[test]
    fn unknown_verb_reports_once() {
        let (mut dispatcher, console) = dispatcher_with_console();
        dispatcher.execute("z 1 2");
        assert_eq!(console.borrow().contents(), "Unknown command: z");
    }

    #[test]
    fn empty_line_is_ignored() {
        let (mut dispatcher, console) = dispatcher_with_console();
        dispatcher.execute("   ");
        assert_eq!(console.borrow().contents(), "");
    }

    #[test]
    fn duplicate_verb_keeps_first_handler() {
        let (mut dispatcher, _console) = dispatcher_with_console();
        let hits = Rc::new(RefCell::new(0));
        let first = hits.clone();
        dispatcher.add_command(
            "x",
            Box::new(move |_| {
                *first.borrow_mut() += 1;
                None
            }),
        );
        dispatcher.add_command("x", Box::new(|_| panic!("second handler ran")));

        dispatcher.execute("x");
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn bytes_go_to_active_session_until_terminate() {
        let (mut dispatcher, _console) = dispatcher_with_console();
        let bytes = Rc::new(RefCell::new(Vec::new()));
        let session_bytes = bytes.clone();
        dispatcher.add_command(
            "w",
            Box::new(move |_| {
                Some(Box::new(CountingSession {
                    bytes: session_bytes.clone(),
                }) as Box<dyn CmdHandler>)
            }),
        );

        assert!(!dispatcher.send_char(b'a'));

        dispatcher.execute("w x");
        assert!(dispatcher.has_active_session());

        // The first byte is consumed by the session, which terminates.
        assert!(dispatcher.send_char(b'q'));
        assert!(!dispatcher.has_active_session());
        assert_eq!(*bytes.borrow(), vec![b'q']);

        // Back in normal mode, bytes are not consumed.
        assert!(!dispatcher.send_char(b'r'));
    }

    #[test]
    fn new_line_supersedes_active_session() {
        let (mut dispatcher, _console) = dispatcher_with_console();
        let bytes = Rc::new(RefCell::new(Vec::new()));
        let session_bytes = bytes.clone();
        dispatcher.add_command(
            "w",
            Box::new(move |_| {
                Some(Box::new(CountingSession {
                    bytes: session_bytes.clone(),
                }) as Box<dyn CmdHandler>)
            }),
        );

        dispatcher.execute("w x");
        dispatcher.execute("w y");
        assert!(dispatcher.has_active_session());

        dispatcher.send_char(b'a');
        // Only the replacement session saw the byte.
        assert_eq!(*bytes.borrow(), vec![b'a']);
    }
}
