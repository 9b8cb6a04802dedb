use crate::charts::{DrawSurface, FontSpec, TextMetrics};
use crate::data::Rgb;

/// One draw call as received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        x: i32,
        y: i32,
        font: FontSpec,
        color: Rgb,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb,
    },
}

/// Headless surface that records draw calls instead of painting.
///
/// Text is measured with fixed per-character advances so layouts are
/// reproducible without any font files. Rectangle sizes are stored after
/// clamping to zero, i.e. as they would be painted.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Horizontal advance of one character, as a fraction of the font size.
    pub const CHAR_ADVANCE: f32 = 0.6;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded rectangles as `(x, y, width, height, color)`.
    pub fn rects(&self) -> Vec<(i32, i32, i32, i32, Rgb)> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => Some((x, y, width, height, color)),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }

    /// Recorded text as `(text, x, y)`.
    pub fn texts(&self) -> Vec<(&str, i32, i32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                DrawCommand::Rect { .. } => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> i32 {
        (text.chars().count() as f32 * font.size * Self::CHAR_ADVANCE).round() as i32
    }

    fn text_metrics(&self, font: &FontSpec) -> TextMetrics {
        let ascent = (font.size * 0.8).round() as i32;
        let descent = (font.size * 0.2).round() as i32;
        TextMetrics {
            ascent,
            descent,
            line_height: ascent + descent + (font.size * 0.15).round() as i32,
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &FontSpec, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: *font,
            color,
        });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_metrics_for_label_font() {
        let surface = RecordingSurface::new();
        let font = FontSpec::label();
        // 14 * 0.6 = 8.4 per char
        assert_eq!(surface.measure_text_width("Food", &font), 34);
        assert_eq!(
            surface.text_metrics(&font),
            TextMetrics {
                ascent: 11,
                descent: 3,
                line_height: 16,
            }
        );
    }

    #[test]
    fn negative_rect_sizes_are_clamped() {
        let mut surface = RecordingSurface::new();
        surface.fill_rect(100, 50, -45, 30, Rgb::BLACK);
        surface.fill_rect(100, 50, 10, -1, Rgb::BLACK);
        assert_eq!(
            surface.rects(),
            vec![(100, 50, 0, 30, Rgb::BLACK), (100, 50, 10, 0, Rgb::BLACK)]
        );
    }
}
