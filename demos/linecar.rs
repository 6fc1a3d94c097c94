//! Scripted tuning session against the line car's command surface.
//!
//! Runs the full console stack on the host: a default car, its registry,
//! the dispatcher, and a manually fired watch timer standing in for the
//! hardware interval timer.

use std::rc::Rc;

use auriga::{
    car::{self, state::CarState},
    terminal::{console::StdoutConsole, dispatcher::Dispatcher},
    tuning::watch::ManualTimer,
};
use log::LevelFilter;

fn main() {
    auriga::fs::logger::init(LevelFilter::Info).expect("Logger init failed");

    let state = auriga::share(CarState::default());
    let console = auriga::share(StdoutConsole);
    let timer = auriga::share(ManualTimer::new());

    let mut dispatcher = Dispatcher::new(console.clone());
    car::setup_commands(
        &mut dispatcher,
        Rc::new(car::default_registry()),
        state.clone(),
        console,
        timer.clone(),
    );

    // A tuning pass as it would arrive over the radio link.
    for line in ["p kp", "s kp 1.25", "p kp", "s srv.deg 20", "p srv.pw", "p nope"] {
        println!("> {}", line);
        dispatcher.execute(line);
        println!();
    }

    // Watch the lateral offset while the sensing loop moves it, then
    // cancel with a keystroke as a terminal user would.
    println!("> w x");
    dispatcher.execute("w x");
    for step in 0..5 {
        state.borrow_mut().x = 0.05 * step as f64;
        timer.borrow_mut().fire();
    }
    dispatcher.send_char(b' ');
    println!();
}
