//! Terminal front-end: wires the pure core to the engine and the screen.
mod app;
mod cli;
mod config;
mod effects;
mod keys;
mod logging;
mod pointer;
mod ui;

pub use app::run_app;
