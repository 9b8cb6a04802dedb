//! Gantt Chart Renderer
//! Lays expense rows out as horizontal bars and issues the draw calls.
//!
//! Layout:
//! 1. Title: centered horizontally, baseline at half the top margin
//! 2. One row per entry, top to bottom in sequence order:
//!    - name right-aligned left of the bar
//!    - bar scaled against the entry's max amount
//!    - formatted amount right of the bar

use crate::charts::{DrawSurface, FontSpec};
use crate::data::{CategoryEntry, Rgb};
use serde::{Deserialize, Serialize};

/// Text color for title, names and amounts.
const TEXT_COLOR: Rgb = Rgb::BLACK;

/// Pixel layout of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub task_height: i32,
    pub bar_gap: i32,
    pub top_margin: i32,
    pub left_margin: i32,
    /// Gap between a bar and its name/amount labels
    pub label_gap: i32,
    pub title_font_size: f32,
    pub label_font_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            task_height: 30,
            bar_gap: 20,
            top_margin: 50,
            left_margin: 100,
            label_gap: 10,
            title_font_size: FontSpec::title().size,
            label_font_size: FontSpec::label().size,
        }
    }
}

impl LayoutConfig {
    pub fn title_font(&self) -> FontSpec {
        FontSpec::bold(self.title_font_size)
    }

    pub fn label_font(&self) -> FontSpec {
        FontSpec::bold(self.label_font_size)
    }

    /// Vertical distance between the tops of consecutive rows.
    pub fn row_pitch(&self) -> i32 {
        self.task_height.saturating_add(self.bar_gap)
    }
}

/// Measurement-free geometry of one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlan {
    /// Top edge of the bar
    pub y: i32,
    /// Unclamped bar width; negative for negative amounts
    pub task_width: i32,
    pub color: Rgb,
}

/// Stateless renderer: every call to [`ChartRenderer::render`] is a full,
/// deterministic redraw from its arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChartRenderer {
    layout: LayoutConfig,
}

impl ChartRenderer {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Width available to a bar at 100% of the scale.
    pub fn chart_width(&self, canvas_width: i32) -> i32 {
        canvas_width.saturating_sub(self.layout.left_margin.saturating_mul(2))
    }

    pub fn row_origin(&self, index: usize) -> i32 {
        let index = i32::try_from(index).unwrap_or(i32::MAX);
        self.layout
            .top_margin
            .saturating_add(index.saturating_mul(self.layout.row_pitch()))
    }

    /// `round(chart_width * amount / max_amount)`, saturating at the i32 range.
    pub fn bar_width(entry: &CategoryEntry, chart_width: i32) -> i32 {
        (f64::from(chart_width) * entry.amount() / entry.max_amount()).round() as i32
    }

    pub fn plan_rows(&self, entries: &[CategoryEntry], canvas_width: i32) -> Vec<RowPlan> {
        let chart_width = self.chart_width(canvas_width);
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| RowPlan {
                y: self.row_origin(index),
                task_width: Self::bar_width(entry, chart_width),
                color: entry.color(),
            })
            .collect()
    }

    /// Draw the title and one bar row per entry onto `surface`.
    ///
    /// A canvas with no area produces no draw calls.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        title: &str,
        entries: &[CategoryEntry],
        canvas_width: i32,
        canvas_height: i32,
    ) {
        tracing::trace!(
            canvas_width,
            canvas_height,
            rows = entries.len(),
            "rendering gantt chart"
        );
        if canvas_width <= 0 || canvas_height <= 0 {
            return;
        }

        let layout = &self.layout;

        // Title
        let title_font = layout.title_font();
        let title_width = surface.measure_text_width(title, &title_font);
        surface.draw_text(
            title,
            canvas_width.saturating_sub(title_width) / 2,
            layout.top_margin / 2,
            &title_font,
            TEXT_COLOR,
        );

        // Rows
        let label_font = layout.label_font();
        let metrics = surface.text_metrics(&label_font);
        for (row, entry) in self.plan_rows(entries, canvas_width).iter().zip(entries) {
            surface.fill_rect(
                layout.left_margin,
                row.y,
                row.task_width,
                layout.task_height,
                row.color,
            );

            let name_width = surface.measure_text_width(entry.name(), &label_font);
            let name_x = layout
                .left_margin
                .saturating_sub(name_width)
                .saturating_sub(layout.label_gap);
            let bar_middle = row.y.saturating_add(layout.task_height / 2);
            let name_y = bar_middle
                .saturating_add(metrics.line_height / 2)
                .saturating_sub(metrics.descent);
            surface.draw_text(entry.name(), name_x, name_y, &label_font, TEXT_COLOR);

            // Negative bars collapse to zero, keep the amount off the name label.
            // Bar widths saturate at i32::MAX for huge amounts, so offsets do too.
            let amount_x = layout
                .left_margin
                .saturating_add(row.task_width.max(0))
                .saturating_add(layout.label_gap);
            surface.draw_text(
                &entry.formatted_amount(),
                amount_x,
                bar_middle,
                &label_font,
                TEXT_COLOR,
            );
        }
    }
}

/// Chart panel state: a title and the rows currently on display.
#[derive(Debug, Clone)]
pub struct GanttChart {
    title: String,
    entries: Vec<CategoryEntry>,
    renderer: ChartRenderer,
}

impl GanttChart {
    pub fn new(title: impl Into<String>, layout: LayoutConfig) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            renderer: ChartRenderer::new(layout),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    /// Replace the whole dataset. The next render shows only `entries`.
    pub fn set_entries(&mut self, entries: Vec<CategoryEntry>) {
        tracing::info!(rows = entries.len(), "chart dataset replaced");
        self.entries = entries;
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, width: i32, height: i32) {
        self.renderer
            .render(surface, &self.title, &self.entries, width, height);
    }
}
