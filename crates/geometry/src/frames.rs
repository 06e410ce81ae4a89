use euclid::{Point2D, Size2D, Vector2D};

// empty structs for euclid typing
#[derive(Clone, PartialEq, Debug, Copy)]
pub struct WorldFrame;

/// Centered on a reference agent, x axis along its heading.
#[derive(Clone, PartialEq, Debug, Copy)]
pub struct AgentFrame;

/// Pixel coordinates of a rendered raster.
#[derive(Clone, PartialEq, Debug, Copy)]
pub struct RasterFrame;

pub type WorldPoint = Point2D<f64, WorldFrame>;

pub type AgentPoint = Point2D<f64, AgentFrame>;
pub type AgentMove = Vector2D<f64, AgentFrame>;

pub type RasterSize = Size2D<u32, RasterFrame>;

pub fn world_point_from_translation3(translation: [f64; 3]) -> WorldPoint {
    WorldPoint::new(translation[0], translation[1])
}

pub fn world_point_from_array(xy: [f64; 2]) -> WorldPoint {
    WorldPoint::new(xy[0], xy[1])
}
