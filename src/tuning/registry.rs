//! Named-variable registry.
//!
//! The registry is the fixed table mapping variable names to accessors
//! over a state struct `S`. Entries are plain function pointers taking
//! the state by reference, so the binding between a name and a field is
//! visible in one table and nothing captures hidden globals.
//!
//! Both tables are built once during setup and only read afterwards;
//! there is no registration API on a built [`Registry`].

use log::warn;

/// A named write accessor.
///
/// `apply` may do more than store the value: the steering servo's
/// degree entry, for instance, runs the calibration math and clamps.
pub struct NamedSetter<S> {
    /// Variable name as typed on the console.
    pub name:  &'static str,
    /// Writes a new value into the state.
    pub apply: fn(&mut S, f64),
}

/// A named read accessor.
pub struct NamedGetter<S> {
    /// Variable name as typed on the console.
    pub name: &'static str,
    /// Reads the current value from the state.
    pub read: fn(&S) -> f64,
}

/// The fixed table of tunable and observable variables.
///
/// Lookup is an exact, case-sensitive match over short ASCII names.
/// Name listings keep registration order, so the console's usage output
/// mirrors the table in the source.
///
/// # Example
///
/// ```
/// use auriga::tuning::registry::{NamedGetter, NamedSetter, Registry};
///
/// struct Gains {
///     kp: f64,
/// }
///
/// let registry = Registry::new(
///     vec![NamedSetter { name: "kp", apply: |s: &mut Gains, f| s.kp = f }],
///     vec![NamedGetter { name: "kp", read: |s: &Gains| s.kp }],
/// );
///
/// let mut gains = Gains { kp: 0.0 };
/// let setter = registry.lookup_setter("kp").unwrap();
/// (setter.apply)(&mut gains, 1.25);
/// assert_eq!(gains.kp, 1.25);
/// ```
pub struct Registry<S> {
    setters: Vec<NamedSetter<S>>,
    getters: Vec<NamedGetter<S>>,
}

impl<S> Registry<S> {
    /// Builds the registry from the full accessor tables.
    ///
    /// Names must be unique within each table; a duplicate is skipped
    /// with a warning and the first entry wins.
    pub fn new(setters: Vec<NamedSetter<S>>, getters: Vec<NamedGetter<S>>) -> Self {
        Registry {
            setters: unique_by_name(setters, |e| e.name, "Setter"),
            getters: unique_by_name(getters, |e| e.name, "Getter"),
        }
    }

    /// Finds the setter registered under `name`, if any.
    pub fn lookup_setter(&self, name: &str) -> Option<&NamedSetter<S>> {
        self.setters.iter().find(|entry| entry.name == name)
    }

    /// Finds the getter registered under `name`, if any.
    pub fn lookup_getter(&self, name: &str) -> Option<&NamedGetter<S>> {
        self.getters.iter().find(|entry| entry.name == name)
    }

    /// All setter names in registration order.
    pub fn setter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.setters.iter().map(|entry| entry.name)
    }

    /// All getter names in registration order.
    pub fn getter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.getters.iter().map(|entry| entry.name)
    }
}

fn unique_by_name<E>(entries: Vec<E>, name: fn(&E) -> &'static str, kind: &str) -> Vec<E> {
    let mut unique: Vec<E> = Vec::with_capacity(entries.len());
    for entry in entries {
        if unique.iter().any(|kept| name(kept) == name(&entry)) {
            warn!("Duplicate {} Registration Skipped: {}", kind, name(&entry));
        } else {
            unique.push(entry);
        }
    }
    unique
}
