//! Expense Gantt Main Application
//! Toolbar, chart view and the expense entry dialog.

use crate::charts::{bold_face_bytes, GanttChart, RasterFonts, RasterSurface};
use crate::config::AppConfig;
use crate::data::collect_entries;
use crate::gui::{
    install_bold_font, ChartView, ErrorNotice, ExpenseForm, INVALID_INPUT_MESSAGE,
};
use egui::{Color32, RichText, TopBottomPanel};
use std::path::Path;

/// Main application window.
pub struct GanttApp {
    config: AppConfig,
    chart: GanttChart,
    chart_view: ChartView,
    form: ExpenseForm,
    notice: ErrorNotice,
    open_after_export: bool,
    status: String,
}

impl GanttApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        match bold_face_bytes(config.fonts.bold.as_deref()) {
            Some(bytes) => install_bold_font(&cc.egui_ctx, bytes),
            None => tracing::warn!("no bold font found, chart labels use the regular face"),
        }

        let chart = GanttChart::new(config.chart_title.clone(), config.layout);

        // The form is shown as soon as the window appears
        let mut form = ExpenseForm::new();
        form.open();

        Self {
            config,
            chart,
            chart_view: ChartView::new(),
            form,
            notice: ErrorNotice::default(),
            open_after_export: false,
            status: "Ready".to_string(),
        }
    }

    fn handle_form(&mut self, ctx: &egui::Context) {
        // Input errors block the form until acknowledged
        if self.notice.is_open() {
            self.notice.show(ctx);
            return;
        }

        if let Some(outcome) = self.form.show(ctx) {
            let (entries, error) = collect_entries(outcome, self.config.scale());
            if error.is_some() {
                self.notice.raise(INVALID_INPUT_MESSAGE);
            }
            self.status = format!("{} categories", entries.len());
            self.chart.set_entries(entries);
        }
    }

    /// Render the chart off-screen at the current canvas size and save it
    fn handle_export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("expenses.png")
            .save_file()
        else {
            return; // User cancelled
        };

        match self.export_png(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "chart exported");
                self.status = format!("Exported {}", display_name(&path));
                if self.open_after_export {
                    if let Err(e) = open::that(&path) {
                        tracing::warn!(error = %e, "failed to open exported chart");
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "chart export failed");
                self.status = format!("Export error: {}", e);
            }
        }
    }

    fn export_png(&self, path: &Path) -> anyhow::Result<()> {
        let fonts = RasterFonts::load(
            self.config.fonts.regular.as_deref(),
            self.config.fonts.bold.as_deref(),
        )?;

        let (width, height) = match self.chart_view.last_size {
            (w, h) if w > 0 && h > 0 => (w, h),
            _ => (
                self.config.window_width as i32,
                self.config.window_height as i32,
            ),
        };

        let mut surface = RasterSurface::new(
            width as u32,
            height as u32,
            self.config.background_color(),
            &fonts,
        );
        self.chart.render(&mut surface, width, height);
        surface.save_png(path)?;
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("✏ Enter Amounts").clicked() {
                    self.form.open();
                }
                if ui.button("💾 Export PNG").clicked() {
                    self.handle_export_png();
                }
                ui.checkbox(&mut self.open_after_export, "Open after export");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = if self.status.contains("error") {
                        Color32::from_rgb(220, 53, 69)
                    } else {
                        Color32::GRAY
                    };
                    ui.label(RichText::new(&self.status).size(11.0).color(color));
                });
            });
        });

        let background = self.config.background_color();
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.chart_view.show(ui, &self.chart, background);
            });

        self.handle_form(ctx);
    }
}
