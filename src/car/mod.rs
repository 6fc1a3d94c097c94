//! The line-following car model and its tuning console wiring.
//!
//! This module binds the framework to the car: [`CarState`](state::CarState)
//! holds every tunable and observed field, [`default_registry`] is the
//! fixed table mapping console names onto those fields, and
//! [`setup_commands`] registers the `w`/`p`/`s` verbs with a dispatcher.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use auriga::{
//!     car::{self, state::CarState},
//!     terminal::{console::BufferConsole, dispatcher::Dispatcher},
//!     tuning::watch::ManualTimer,
//! };
//!
//! let state = auriga::share(CarState::default());
//! let console = auriga::share(BufferConsole::new());
//! let timer = auriga::share(ManualTimer::new());
//!
//! let mut dispatcher = Dispatcher::new(console.clone());
//! car::setup_commands(
//!     &mut dispatcher,
//!     Rc::new(car::default_registry()),
//!     state,
//!     console.clone(),
//!     timer,
//! );
//!
//! dispatcher.execute("s kp 1.25");
//! assert_eq!(console.borrow().contents(), "kp = 1.2500");
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{
    terminal::{
        console::SharedConsole,
        dispatcher::{CmdHandler, Dispatcher},
    },
    tuning::{
        commands,
        registry::{NamedGetter, NamedSetter, Registry},
        watch::SharedTimer,
    },
};

/// Car state and servo calibration types.
pub mod state;

use state::CarState;

/// Builds the car's variable registry.
///
/// The table is the single place where console names meet state fields.
/// Most entries store or load a field directly; `srv.deg` goes through
/// the servo calibration, and `en` treats any positive value as true.
pub fn default_registry() -> Registry<CarState> {
    let setters: Vec<NamedSetter<CarState>> = vec![
        NamedSetter { name: "h", apply: |s, f| s.h = f },
        NamedSetter { name: "d", apply: |s, f| s.d = f },
        NamedSetter { name: "c1", apply: |s, f| s.c1 = f },
        NamedSetter { name: "c2", apply: |s, f| s.c2 = f },
        NamedSetter { name: "speed", apply: |s, f| s.speed = f },
        NamedSetter { name: "kp", apply: |s, f| s.kp = f },
        NamedSetter { name: "ki", apply: |s, f| s.ki = f },
        NamedSetter { name: "kd", apply: |s, f| s.kd = f },
        NamedSetter { name: "xmax", apply: |s, f| s.xmax = f },
        NamedSetter { name: "srv.cen", apply: |s, f| s.servo.center = f },
        NamedSetter { name: "srv.upd", apply: |s, f| s.servo.us_per_degree = f },
        NamedSetter { name: "srv.ul", apply: |s, f| s.servo.upper_limit = f },
        NamedSetter { name: "srv.ll", apply: |s, f| s.servo.lower_limit = f },
        NamedSetter { name: "srv.deg", apply: |s, f| s.servo.write(f) },
        NamedSetter { name: "en", apply: |s, f| s.controller_enabled = f > 0.0 },
        NamedSetter { name: "sclim", apply: |s, f| s.score_limit = f },
    ];

    let getters: Vec<NamedGetter<CarState>> = vec![
        NamedGetter { name: "h", read: |s| s.h },
        NamedGetter { name: "d", read: |s| s.d },
        NamedGetter { name: "c1", read: |s| s.c1 },
        NamedGetter { name: "c2", read: |s| s.c2 },
        NamedGetter { name: "speed", read: |s| s.speed },
        NamedGetter { name: "sctrl", read: |s| s.speed_ctrl },
        NamedGetter { name: "sref", read: |s| s.speed_ref },
        NamedGetter { name: "kp", read: |s| s.kp },
        NamedGetter { name: "ki", read: |s| s.ki },
        NamedGetter { name: "kd", read: |s| s.kd },
        NamedGetter { name: "srv.cen", read: |s| s.servo.center },
        NamedGetter { name: "srv.upd", read: |s| s.servo.us_per_degree },
        NamedGetter { name: "srv.ul", read: |s| s.servo.upper_limit },
        NamedGetter { name: "srv.ll", read: |s| s.servo.lower_limit },
        NamedGetter { name: "srv.deg", read: |s| s.servo.read() },
        NamedGetter { name: "srv.pw", read: |s| s.servo.pulse_width },
        NamedGetter { name: "ctrl", read: |s| s.controller_out },
        NamedGetter { name: "en", read: |s| if s.controller_enabled { 1.0 } else { 0.0 } },
        NamedGetter { name: "vr", read: |s| s.vr },
        NamedGetter { name: "vl", read: |s| s.vl },
        NamedGetter { name: "xr", read: |s| s.xr },
        NamedGetter { name: "xl", read: |s| s.xl },
        NamedGetter { name: "xmax", read: |s| s.xmax },
        NamedGetter { name: "x", read: |s| s.x },
        NamedGetter { name: "but", read: |s| if s.button { 1.0 } else { 0.0 } },
        NamedGetter { name: "sw1", read: |s| if s.switch1 { 1.0 } else { 0.0 } },
        NamedGetter { name: "sw2", read: |s| if s.switch2 { 1.0 } else { 0.0 } },
        NamedGetter { name: "scmin", read: |s| s.min_score },
        NamedGetter { name: "sclim", read: |s| s.score_limit },
        NamedGetter { name: "theta", read: |s| s.theta },
        NamedGetter { name: "thetalp", read: |s| s.theta_lp },
        NamedGetter { name: "thetaest", read: |s| s.theta_est },
        NamedGetter { name: "k", read: |s| s.curvature },
        NamedGetter { name: "vel", read: |s| s.velocity },
        NamedGetter { name: "acc", read: |s| s.accel },
        NamedGetter { name: "enc", read: |s| s.enc_counts },
    ];

    Registry::new(setters, getters)
}

/// Registers the tuning console verbs with `dispatcher`.
///
/// Wires `w` (watch), `p` (print), and `s` (set) over the shared car
/// state, console, and timer. Called once during startup, after the
/// transport and dispatcher exist.
pub fn setup_commands(
    dispatcher: &mut Dispatcher,
    registry: Rc<Registry<CarState>>,
    state: Rc<RefCell<CarState>>,
    console: SharedConsole,
    timer: SharedTimer,
) {
    {
        let registry = registry.clone();
        let state = state.clone();
        let console = console.clone();
        dispatcher.add_command(
            "w",
            Box::new(move |args| {
                commands::watch(&registry, &state, &console, &timer, args)
                    .map(|session| Box::new(session) as Box<dyn CmdHandler>)
            }),
        );
    }

    {
        let registry = registry.clone();
        let state = state.clone();
        let console = console.clone();
        dispatcher.add_command(
            "p",
            Box::new(move |args| {
                let state = state.borrow();
                commands::print(&registry, &*state, &mut *console.borrow_mut(), args);
                None
            }),
        );
    }

    dispatcher.add_command(
        "s",
        Box::new(move |args| {
            let mut state = state.borrow_mut();
            commands::set(&registry, &mut *state, &mut *console.borrow_mut(), args);
            None
        }),
    );
}
