//! GUI module - eframe host for the chart

mod app;
mod chart_view;
mod expense_form;

pub use app::GanttApp;
pub use chart_view::{install_bold_font, ChartView, PainterSurface};
pub use expense_form::{ErrorNotice, ExpenseForm, INVALID_INPUT_MESSAGE};
