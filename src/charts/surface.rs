//! Drawing surface contract.
//!
//! The chart renderer only talks to this trait, so the same layout code drives
//! the desktop window, PNG export and headless tests.

use crate::data::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Requested font. All chart text is sans-serif, so only weight and size vary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub weight: FontWeight,
    pub size: f32,
}

impl FontSpec {
    pub const fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
        }
    }

    /// Chart title font.
    pub const fn title() -> Self {
        Self::bold(18.0)
    }

    /// Category name and amount font.
    pub const fn label() -> Self {
        Self::bold(14.0)
    }
}

/// Vertical font metrics in pixels. `descent` is positive below the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub ascent: i32,
    pub descent: i32,
    pub line_height: i32,
}

/// Backend the chart renderer issues its draw calls to.
pub trait DrawSurface {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> i32;

    fn text_metrics(&self, font: &FontSpec) -> TextMetrics;

    /// Draw `text` with its left edge at `x` and its baseline at `y`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &FontSpec, color: Rgb);

    /// Fill an axis-aligned rectangle.
    ///
    /// Implementations must treat a non-positive `width` or `height` as an
    /// empty rectangle and never fail on it.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb);
}
