//! Raster Surface
//! Paints the chart into an in-memory RGBA image for PNG export and headless use.

use crate::charts::{DrawSurface, FontSpec, FontWeight, TextMetrics};
use crate::data::Rgb;
use crate::error::{ChartError, ChartResult};
use ab_glyph::{Font, FontRef, FontVec, PxScale, ScaleFont};
use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::io::Cursor;
use std::path::{Path, PathBuf};

// Common system locations of a bold and a regular sans-serif face
const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];
const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Raw bytes of a bold face that parses as a font: `explicit` when given,
/// otherwise the first system candidate. Used to give the window a bold face.
pub fn bold_face_bytes(explicit: Option<&Path>) -> Option<Vec<u8>> {
    explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(BOLD_CANDIDATES.iter().map(PathBuf::from))
        .filter(|path| path.is_file())
        .find_map(|path| {
            let bytes = std::fs::read(&path).ok()?;
            match FontRef::try_from_slice(&bytes) {
                Ok(_) => Some(bytes),
                Err(_) => {
                    tracing::debug!(path = %path.display(), "not a usable bold face");
                    None
                }
            }
        })
}

/// Loaded font faces for the raster surface.
pub struct RasterFonts {
    regular: FontVec,
    bold: Option<FontVec>,
}

impl RasterFonts {
    /// Load fonts from explicit paths, falling back to well-known system
    /// locations for any face not given. A missing bold face reuses the
    /// regular one.
    pub fn load(regular: Option<&Path>, bold: Option<&Path>) -> ChartResult<Self> {
        let bold = match bold {
            Some(path) => Some(Self::read_font(path)?),
            None => Self::first_available(BOLD_CANDIDATES),
        };
        let regular = match regular {
            Some(path) => Some(Self::read_font(path)?),
            None => Self::first_available(REGULAR_CANDIDATES),
        };

        match (regular, bold) {
            (Some(regular), bold) => Ok(Self { regular, bold }),
            (None, Some(bold)) => Ok(Self {
                regular: bold,
                bold: None,
            }),
            (None, None) => Err(ChartError::FontNotFound {
                tried: BOLD_CANDIDATES.len() + REGULAR_CANDIDATES.len(),
            }),
        }
    }

    /// Load from system locations only.
    pub fn discover() -> ChartResult<Self> {
        Self::load(None, None)
    }

    fn read_font(path: &Path) -> ChartResult<FontVec> {
        let bytes = std::fs::read(path).map_err(|source| ChartError::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;
        FontVec::try_from_vec(bytes).map_err(|_| ChartError::InvalidFont(path.to_path_buf()))
    }

    fn first_available(candidates: &[&str]) -> Option<FontVec> {
        candidates.iter().map(PathBuf::from).find_map(|path| {
            if !path.is_file() {
                return None;
            }
            match Self::read_font(&path) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), "loaded raster font");
                    Some(font)
                }
                Err(err) => {
                    tracing::debug!(%err, "skipping font candidate");
                    None
                }
            }
        })
    }

    fn face(&self, weight: FontWeight) -> &FontVec {
        match weight {
            FontWeight::Bold => self.bold.as_ref().unwrap_or(&self.regular),
            FontWeight::Regular => &self.regular,
        }
    }
}

/// [`DrawSurface`] backed by an [`RgbaImage`].
pub struct RasterSurface<'f> {
    image: RgbaImage,
    fonts: &'f RasterFonts,
}

impl<'f> RasterSurface<'f> {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb, fonts: &'f RasterFonts) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, to_rgba(background)),
            fonts,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Encode the canvas as PNG.
    pub fn into_png_bytes(self) -> ChartResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    pub fn save_png(&self, path: &Path) -> ChartResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

fn to_rgba(color: Rgb) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

impl DrawSurface for RasterSurface<'_> {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> i32 {
        let (width, _) = text_size(PxScale::from(font.size), self.fonts.face(font.weight), text);
        i32::try_from(width).unwrap_or(i32::MAX)
    }

    fn text_metrics(&self, font: &FontSpec) -> TextMetrics {
        let scaled = self
            .fonts
            .face(font.weight)
            .as_scaled(PxScale::from(font.size));
        let ascent = scaled.ascent();
        let descent = -scaled.descent();
        TextMetrics {
            ascent: ascent.round() as i32,
            descent: descent.round() as i32,
            line_height: (ascent + descent + scaled.line_gap()).round() as i32,
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &FontSpec, color: Rgb) {
        // imageproc positions text by its top edge
        let top = y.saturating_sub(self.text_metrics(font).ascent);
        // Fully off-canvas text is skipped; imageproc adds glyph offsets to
        // the origin, which overflows at the ends of the i32 range.
        let (width, height) = self.image.dimensions();
        let right = x.saturating_add(self.measure_text_width(text, font));
        if i64::from(x) >= i64::from(width) || i64::from(top) >= i64::from(height) || right <= 0 {
            return;
        }
        draw_text_mut(
            &mut self.image,
            to_rgba(color),
            x,
            top,
            PxScale::from(font.size),
            self.fonts.face(font.weight),
            text,
        );
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        if width <= 0 || height <= 0 {
            return;
        }
        // Clip to the canvas first; imageproc's Rect edges are i32 and a bar
        // saturated at i32::MAX would overflow them.
        let left = i64::from(x).max(0);
        let top = i64::from(y).max(0);
        let right = (i64::from(x) + i64::from(width)).min(i64::from(self.image.width()));
        let bottom = (i64::from(y) + i64::from(height)).min(i64::from(self.image.height()));
        if right <= left || bottom <= top {
            return;
        }
        draw_filled_rect_mut(
            &mut self.image,
            Rect::at(left as i32, top as i32).of_size((right - left) as u32, (bottom - top) as u32),
            to_rgba(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKGROUND: Rgb = Rgb::new(0xF0, 0xF0, 0xF0);

    // Hosts without any of the candidate fonts skip these tests
    fn fonts() -> Option<RasterFonts> {
        RasterFonts::discover().ok()
    }

    #[test]
    fn fill_rect_paints_clipped_area() {
        let Some(fonts) = fonts() else { return };
        let mut surface = RasterSurface::new(20, 20, BACKGROUND, &fonts);
        let green = Rgb::new(0x09, 0x79, 0x69);
        surface.fill_rect(15, 5, 100, 4, green);

        let image = surface.image();
        assert_eq!(image.get_pixel(15, 5), &to_rgba(green));
        assert_eq!(image.get_pixel(19, 8), &to_rgba(green));
        assert_eq!(image.get_pixel(14, 5), &to_rgba(BACKGROUND));
        assert_eq!(image.get_pixel(15, 9), &to_rgba(BACKGROUND));
    }

    #[test]
    fn saturated_bar_fills_to_the_right_edge() {
        let Some(fonts) = fonts() else { return };
        let mut surface = RasterSurface::new(20, 20, BACKGROUND, &fonts);
        let green = Rgb::new(0x09, 0x79, 0x69);
        surface.fill_rect(5, 2, i32::MAX, 3, green);
        surface.fill_rect(i32::MAX - 1, 0, i32::MAX, 3, Rgb::BLACK);

        let image = surface.image();
        assert_eq!(image.get_pixel(5, 2), &to_rgba(green));
        assert_eq!(image.get_pixel(19, 4), &to_rgba(green));
        assert_eq!(image.get_pixel(4, 2), &to_rgba(BACKGROUND));
        assert_eq!(image.get_pixel(19, 0), &to_rgba(BACKGROUND));
    }

    #[test]
    fn off_canvas_text_is_skipped() {
        let Some(fonts) = fonts() else { return };
        let mut surface = RasterSurface::new(20, 20, BACKGROUND, &fonts);
        let font = FontSpec::label();
        surface.draw_text("$10000000000.00", i32::MAX, 10, &font, Rgb::BLACK);
        surface.draw_text("Transportation", i32::MIN, 10, &font, Rgb::BLACK);
        surface.draw_text("Food", 0, i32::MAX, &font, Rgb::BLACK);
        assert!(surface.image().pixels().all(|p| *p == to_rgba(BACKGROUND)));
    }

    #[test]
    fn non_positive_rects_are_ignored() {
        let Some(fonts) = fonts() else { return };
        let mut surface = RasterSurface::new(10, 10, BACKGROUND, &fonts);
        surface.fill_rect(0, 0, -5, 10, Rgb::BLACK);
        surface.fill_rect(0, 0, 10, 0, Rgb::BLACK);
        assert!(surface.image().pixels().all(|p| *p == to_rgba(BACKGROUND)));
    }

    #[test]
    fn bold_text_is_measurable() {
        let Some(fonts) = fonts() else { return };
        let surface = RasterSurface::new(10, 10, BACKGROUND, &fonts);
        let font = FontSpec::label();
        let short = surface.measure_text_width("Food", &font);
        let long = surface.measure_text_width("Transportation", &font);
        assert!(short > 0);
        assert!(long > short);

        let metrics = surface.text_metrics(&font);
        assert!(metrics.ascent > 0);
        assert!(metrics.descent >= 0);
        assert!(metrics.line_height >= metrics.ascent);
    }

    #[test]
    fn png_bytes_have_signature() {
        let Some(fonts) = fonts() else { return };
        let surface = RasterSurface::new(8, 8, BACKGROUND, &fonts);
        let bytes = surface.into_png_bytes().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn unparsable_bold_face_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();

        // a system bold face may still be found, but never the bogus bytes
        let found = bold_face_bytes(Some(&bogus));
        assert!(found.map_or(true, |bytes| bytes != b"not a font"));
    }

    #[test]
    fn missing_explicit_font_is_an_error() {
        let err = RasterFonts::load(Some(Path::new("/nonexistent/font.ttf")), None);
        assert!(matches!(err, Err(ChartError::FontLoad { .. })));
    }
}
