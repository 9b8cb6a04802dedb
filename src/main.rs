//! Expense Gantt - Daily Expense Chart
//!
//! Desktop window that asks for today's expenses and charts them as bars.

use eframe::egui;
use expense_gantt::gui::GanttApp;
use expense_gantt::{telemetry, AppConfig};

fn main() -> anyhow::Result<()> {
    let _ = telemetry::init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(title = %config.chart_title, max_amount = config.max_amount, "starting");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    // Run the application
    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(GanttApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}
