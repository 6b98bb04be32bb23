#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
pub mod bridge;
pub mod models;
pub mod platform;
pub mod redraw;
pub mod services;

pub mod context;
pub mod shell;
pub mod views;

pub mod error;
pub mod logging;
pub mod settings;

pub use context::AppContext;
pub use shell::Shell;
