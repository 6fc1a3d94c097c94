//! Live tuning over the console.
//!
//! This module implements the named-variable mechanism that makes a car
//! tunable while it drives:
//!
//! - **Registry**: fixed name→accessor tables over an explicit state
//!   struct, built once at startup.
//! - **Commands**: the `p` (print), `s` (set), and `w` (watch) operations
//!   registered with the dispatcher.
//! - **Watch**: a recurring-timer session that re-renders one value in
//!   place on the console line until the next keystroke.
//!
//! # Example
//!
//! ```ignore
//! use auriga::tuning::registry::{NamedGetter, NamedSetter, Registry};
//!
//! let registry = Registry::new(
//!     vec![NamedSetter { name: "kp", apply: |s: &mut Gains, f| s.kp = f }],
//!     vec![NamedGetter { name: "kp", read: |s: &Gains| s.kp }],
//! );
//!
//! // "s kp 1.25" then "p kp" on the console prints "kp = 1.2500".
//! ```

/// Named-variable registry.
///
/// Provides [`Registry`](registry::Registry) with its
/// [`NamedSetter`](registry::NamedSetter) and
/// [`NamedGetter`](registry::NamedGetter) entries.
pub mod registry;

/// The print, set, and watch command operations.
///
/// Free functions implementing the three console commands on top of a
/// registry, plus the permissive float parser used by `set`.
pub mod commands;

/// Periodic watch sessions.
///
/// Provides the [`WatchSession`](watch::WatchSession) command handler and
/// the [`RecurringTimer`](watch::RecurringTimer) seam it drives.
pub mod watch;
