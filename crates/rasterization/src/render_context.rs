use euclid::{vec2, Transform2D};
use geometry::{AgentFrame, Pose, RasterFrame, RasterSize, WorldFrame};
use getset::CopyGetters;

use crate::{RasterizationError, Result};

/// Geometry of a raster: its size in pixels, the metres covered by one
/// pixel, and where the reference agent sits as a fraction of the size.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct RenderContext {
    raster_size_px: RasterSize,
    pixel_size_m: (f64, f64),
    center_in_raster_ratio: (f64, f64),
}

impl RenderContext {
    pub fn new(
        raster_size_px: (u32, u32),
        pixel_size_m: (f64, f64),
        center_in_raster_ratio: (f64, f64),
    ) -> Result<Self> {
        let (width, height) = raster_size_px;
        if width == 0 || height == 0 {
            return Err(RasterizationError::InvalidRenderContext(format!(
                "raster size must be non-zero, got {raster_size_px:?}"
            )));
        }
        let (px, py) = pixel_size_m;
        if !(px.is_finite() && py.is_finite() && px > 0.0 && py > 0.0) {
            return Err(RasterizationError::InvalidRenderContext(format!(
                "pixel size must be positive, got {pixel_size_m:?}"
            )));
        }
        let (cx, cy) = center_in_raster_ratio;
        if !((0.0..=1.0).contains(&cx) && (0.0..=1.0).contains(&cy)) {
            return Err(RasterizationError::InvalidRenderContext(format!(
                "center ratio must lie in [0, 1], got {center_in_raster_ratio:?}"
            )));
        }
        Ok(RenderContext {
            raster_size_px: RasterSize::new(width, height),
            pixel_size_m,
            center_in_raster_ratio,
        })
    }

    /// Scales metres to pixels, then moves the origin to the anchor pixel.
    pub fn raster_from_local(&self) -> Transform2D<f64, AgentFrame, RasterFrame> {
        let (px, py) = self.pixel_size_m;
        let (cx, cy) = self.center_in_raster_ratio;
        let center_px = vec2(
            f64::from(self.raster_size_px.width) * cx,
            f64::from(self.raster_size_px.height) * cy,
        );
        Transform2D::scale(1.0 / px, 1.0 / py).then_translate(center_px)
    }

    pub fn raster_from_world(&self, pose: &Pose) -> Transform2D<f64, WorldFrame, RasterFrame> {
        pose.agent_from_world()
            .to_transform()
            .then(&self.raster_from_local())
    }
}
