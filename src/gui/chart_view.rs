//! Chart View Widget
//! Central panel that paints the Gantt chart with the egui painter.

use crate::charts::{DrawSurface, FontSpec, FontWeight, GanttChart, TextMetrics};
use crate::data::Rgb;
use egui::{Align2, Color32, FontData, FontDefinitions, FontFamily, FontId, Pos2, Rect, Sense};
use std::sync::Arc;

/// Name of the font family that holds the bold chart face.
pub const BOLD_FAMILY: &str = "chart-bold";

/// egui's default fonts plus a [`BOLD_FAMILY`] family whose first face is
/// `bold_face`. Glyphs missing from it fall back to the proportional chain.
pub fn bold_font_definitions(bold_face: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(BOLD_FAMILY.to_owned(), Arc::new(FontData::from_owned(bold_face)));

    let mut chain = vec![BOLD_FAMILY.to_owned()];
    chain.extend(
        fonts
            .families
            .get(&FontFamily::Proportional)
            .cloned()
            .unwrap_or_default(),
    );
    fonts.families.insert(FontFamily::Name(BOLD_FAMILY.into()), chain);
    fonts
}

/// Install [`bold_font_definitions`] on `ctx`. Takes effect from the next frame.
pub fn install_bold_font(ctx: &egui::Context, bold_face: Vec<u8>) {
    ctx.set_fonts(bold_font_definitions(bold_face));
}

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// [`DrawSurface`] over an egui painter, with chart coordinates relative to
/// `origin`.
pub struct PainterSurface<'p> {
    painter: &'p egui::Painter,
    origin: Pos2,
    /// Whether the context has a [`BOLD_FAMILY`] to draw bold text with
    has_bold: bool,
}

impl<'p> PainterSurface<'p> {
    pub fn new(painter: &'p egui::Painter, origin: Pos2) -> Self {
        let bold = FontFamily::Name(BOLD_FAMILY.into());
        let has_bold = painter
            .ctx()
            .fonts(|fonts| fonts.families().contains(&bold));
        Self {
            painter,
            origin,
            has_bold,
        }
    }

    fn font_id(&self, font: &FontSpec) -> FontId {
        match font.weight {
            FontWeight::Bold if self.has_bold => {
                FontId::new(font.size, FontFamily::Name(BOLD_FAMILY.into()))
            }
            _ => FontId::proportional(font.size),
        }
    }

    fn at(&self, x: i32, y: i32) -> Pos2 {
        self.origin + egui::vec2(x as f32, y as f32)
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> i32 {
        let galley =
            self.painter
                .layout_no_wrap(text.to_string(), self.font_id(font), Color32::BLACK);
        galley.size().x.round() as i32
    }

    fn text_metrics(&self, font: &FontSpec) -> TextMetrics {
        let font_id = self.font_id(font);
        let galley = self
            .painter
            .layout_no_wrap("Hg".to_string(), font_id.clone(), Color32::BLACK);
        let (ascent, height) = match galley.rows.first().and_then(|row| row.glyphs.first()) {
            Some(glyph) => (glyph.font_ascent, glyph.font_height),
            None => {
                let row_height = self.painter.ctx().fonts(|fonts| fonts.row_height(&font_id));
                (row_height, row_height)
            }
        };
        TextMetrics {
            ascent: ascent.round() as i32,
            descent: (height - ascent).max(0.0).round() as i32,
            line_height: height.round() as i32,
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &FontSpec, color: Rgb) {
        let top = y - self.text_metrics(font).ascent;
        self.painter.text(
            self.at(x, top),
            Align2::LEFT_TOP,
            text,
            self.font_id(font),
            to_color32(color),
        );
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        if width <= 0 || height <= 0 {
            return;
        }
        let rect = Rect::from_min_size(self.at(x, y), egui::vec2(width as f32, height as f32));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }
}

/// Paints the chart into whatever space the panel offers.
#[derive(Default)]
pub struct ChartView {
    /// Canvas size from the last frame, in whole pixels
    pub last_size: (i32, i32),
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, chart: &GanttChart, background: Rgb) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, to_color32(background));

        let size = (rect.width().floor() as i32, rect.height().floor() as i32);
        if size != self.last_size {
            tracing::debug!(width = size.0, height = size.1, "chart canvas resized");
            self.last_size = size;
        }

        let mut surface = PainterSurface::new(&painter, rect.min);
        chart.render(&mut surface, size.0, size.1);
    }
}
