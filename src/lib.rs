//! Expense Gantt - daily expenses as a horizontal bar chart
//!
//! The chart core (`data`, `charts`) draws through the [`charts::DrawSurface`]
//! trait only; `gui` hosts it in an eframe window.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;
pub mod telemetry;

pub use charts::{ChartRenderer, DrawSurface, GanttChart};
pub use config::AppConfig;
pub use data::CategoryEntry;
pub use error::{ChartError, ConfigError, InputError};
