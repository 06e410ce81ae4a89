//! Maps agent-local metres onto raster pixels and renders history into
//! images. Only the stub renderer lives here.

mod render_context;
pub use render_context::*;

mod raster_image;
pub use raster_image::RasterImage;

mod rasterizer;
pub use rasterizer::*;

mod error;
pub use error::{RasterizationError, Result};
