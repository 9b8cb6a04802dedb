//! Charts module - Gantt chart layout and drawing surfaces

mod raster;
mod recording;
mod renderer;
mod surface;

pub use raster::{bold_face_bytes, RasterFonts, RasterSurface};
pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{ChartRenderer, GanttChart, LayoutConfig, RowPlan};
pub use surface::{DrawSurface, FontSpec, FontWeight, TextMetrics};
