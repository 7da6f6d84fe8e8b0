//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Screen, run_tui};
