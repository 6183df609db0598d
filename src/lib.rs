// src/lib.rs

//! A command-driven pixel-grid editor.
//!
//! Commands such as `I 5 6` or `F 3 3 J` are parsed by `command::Command`,
//! routed by `command::CommandRouter` and applied to a `grid::Grid`.

pub mod command;
pub mod config;
pub mod error;
pub mod grid;
pub mod pixel;
pub mod sink;

pub use command::{CommandRouter, RouterStatus, Verb};
pub use config::{Config, CONFIG};
pub use error::{CommandError, GridError};
pub use grid::Grid;
pub use pixel::{Pixel, DEFAULT_PIXEL};
pub use sink::{FileSink, MemorySink, PersistenceSink};
