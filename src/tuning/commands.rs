//! The print, set, and watch console commands.
//!
//! Each operation takes the line remainder the dispatcher passes after
//! stripping the verb. None of them can fail: an unknown variable name or
//! a malformed line degrades to a usage message listing the valid names,
//! and a value that does not parse becomes `0.0`.
//!
//! Values are rendered with four decimal places everywhere, so a set
//! echoes exactly what a later print will show.

use std::{cell::RefCell, rc::Rc};

use crate::{
    terminal::console::{Console, SharedConsole},
    tuning::{
        registry::Registry,
        watch::{SharedTimer, WatchSession},
    },
};

/// Prints one variable's current value: `p <var>`.
///
/// Writes `"<name> = <value>"` for a known getter, or usage plus the
/// getter list otherwise.
pub fn print<S>(registry: &Registry<S>, state: &S, console: &mut dyn Console, args: &str) {
    if let Some(name) = first_token(args) {
        if let Some(getter) = registry.lookup_getter(name) {
            console.write(&format!("{} = {:.4}", name, (getter.read)(state)));
            return;
        }
    }
    write_usage(console, "Usage: p <var>", registry.getter_names());
}

/// Sets one variable: `s <var> <value>`.
///
/// The value is everything after the name token, parsed with
/// [`parse_float`]. Applies the setter and echoes the parsed value, or
/// writes usage plus the setter list when the name is unknown or the
/// line has no value part.
pub fn set<S>(registry: &Registry<S>, state: &mut S, console: &mut dyn Console, args: &str) {
    if let Some((name, value_text)) = split_name_value(args) {
        if let Some(setter) = registry.lookup_setter(name) {
            let value = parse_float(value_text);
            (setter.apply)(state, value);
            console.write(&format!("{} = {:.4}", name, value));
            return;
        }
    }
    write_usage(console, "Usage: s <var> <value>", registry.setter_names());
}

/// Starts watching one variable: `w <var>`.
///
/// On a getter match, arms the timer and returns the active
/// [`WatchSession`] for the dispatcher to hold. Otherwise writes usage
/// plus the getter list and returns `None`.
pub fn watch<S: 'static>(
    registry: &Registry<S>,
    state: &Rc<RefCell<S>>,
    console: &SharedConsole,
    timer: &SharedTimer,
    args: &str,
) -> Option<WatchSession> {
    if let Some(name) = first_token(args) {
        if let Some(getter) = registry.lookup_getter(name) {
            return Some(WatchSession::begin(
                getter.name,
                getter.read,
                state.clone(),
                console.clone(),
                timer.clone(),
            ));
        }
    }
    write_usage(
        &mut *console.borrow_mut(),
        "Usage: w <var>",
        registry.getter_names(),
    );
    None
}

/// Parses a float the way `strtof` does: the longest numeric prefix of
/// the trimmed input wins, and anything unparseable yields `0.0`.
///
/// # Example
///
/// ```
/// use auriga::tuning::commands::parse_float;
///
/// assert_eq!(parse_float(" -12.5 "), -12.5);
/// assert_eq!(parse_float("3.5abc"), 3.5);
/// assert_eq!(parse_float("abc"), 0.0);
/// ```
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim();
    let ends = text
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain([text.len()]);

    let mut value = 0.0;
    for end in ends {
        if let Ok(parsed) = text[..end].parse::<f64>() {
            value = parsed;
        }
    }
    value
}

fn first_token(args: &str) -> Option<&str> { args.split_whitespace().next() }

/// Splits `<name> <value...>`; `None` when there is no value part at all.
fn split_name_value(args: &str) -> Option<(&str, &str)> {
    args.trim_start().split_once(char::is_whitespace)
}

fn write_usage<'a>(
    console: &mut dyn Console,
    usage: &str,
    names: impl Iterator<Item = &'a str>,
) {
    let mut out = String::from(usage);
    out.push_str("\nValid vars:");
    for name in names {
        out.push_str("\n  ");
        out.push_str(name);
    }
    console.write(&out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        terminal::console::BufferConsole,
        tuning::registry::{NamedGetter, NamedSetter},
    };

    struct TestState {
        a: f64,
        b: f64,
    }

    fn test_registry() -> Registry<TestState> {
        let setters: Vec<NamedSetter<TestState>> = vec![
            NamedSetter { name: "a", apply: |s, f| s.a = f },
            NamedSetter { name: "b", apply: |s, f| s.b = f },
        ];
        let getters: Vec<NamedGetter<TestState>> = vec![
            NamedGetter { name: "a", read: |s| s.a },
            NamedGetter { name: "b", read: |s| s.b },
        ];
        Registry::new(setters, getters)
    }

    #[test]
    fn print_formats_four_decimals() {
        let registry = test_registry();
        let state = TestState { a: 1.5, b: 0.0 };
        let mut console = BufferConsole::new();

        print(&registry, &state, &mut console, "a");
        assert_eq!(console.contents(), "a = 1.5000");
    }

    #[test]
    fn print_unknown_lists_getters() {
        let registry = test_registry();
        let state = TestState { a: 0.0, b: 0.0 };
        let mut console = BufferConsole::new();

        print(&registry, &state, &mut console, "nope");
        assert_eq!(console.contents(), "Usage: p <var>\nValid vars:\n  a\n  b");
    }

    #[test]
    fn print_without_token_lists_getters() {
        let registry = test_registry();
        let state = TestState { a: 0.0, b: 0.0 };
        let mut console = BufferConsole::new();

        print(&registry, &state, &mut console, "");
        assert!(console.contents().starts_with("Usage: p <var>\nValid vars:"));
    }

    #[test]
    fn set_applies_and_echoes() {
        let registry = test_registry();
        let mut state = TestState { a: 0.0, b: 0.0 };
        let mut console = BufferConsole::new();

        set(&registry, &mut state, &mut console, "a -2.25");
        assert_eq!(state.a, -2.25);
        assert_eq!(console.contents(), "a = -2.2500");
    }

    #[test]
    fn set_non_numeric_value_applies_zero() {
        let registry = test_registry();
        let mut state = TestState { a: 9.0, b: 0.0 };
        let mut console = BufferConsole::new();

        set(&registry, &mut state, &mut console, "a abc");
        assert_eq!(state.a, 0.0);
        assert_eq!(console.contents(), "a = 0.0000");
    }

    #[test]
    fn set_without_value_part_lists_setters() {
        let registry = test_registry();
        let mut state = TestState { a: 9.0, b: 0.0 };
        let mut console = BufferConsole::new();

        set(&registry, &mut state, &mut console, "a");
        assert_eq!(state.a, 9.0);
        assert_eq!(
            console.contents(),
            "Usage: s <var> <value>\nValid vars:\n  a\n  b"
        );
    }

    #[test]
    fn set_then_print_round_trips() {
        let registry = test_registry();
        let mut state = TestState { a: 0.0, b: 0.0 };
        let mut console = BufferConsole::new();

        for _ in 0..2 {
            set(&registry, &mut state, &mut console, "b 4.5");
        }
        console.clear();
        print(&registry, &state, &mut console, "b");
        assert_eq!(console.contents(), "b = 4.5000");
    }

    #[test]
    fn parse_float_matches_strtof() {
        assert_eq!(parse_float("1.5"), 1.5);
        assert_eq!(parse_float("  -3 "), -3.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5xyz"), 2.5);
        assert_eq!(parse_float(""), 0.0);
        assert_eq!(parse_float("abc"), 0.0);
        assert_eq!(parse_float("-"), 0.0);
    }
}
