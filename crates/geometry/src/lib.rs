//! 2D geometry for trajectory sampling: yaw angles, typed coordinate
//! frames, poses and rigid transforms between frames.

mod yaw;
pub use yaw::{deg, Yaw};

mod frames;
pub use frames::*;

mod rigid_transform;
pub use rigid_transform::*;

mod rotation33;
pub use rotation33::*;

mod pose;
pub use pose::Pose;

mod error;
pub use error::{GeometryError, Result};

pub use euclid::{point2, vec2, Point2D, Rotation2D, Size2D, Transform2D, Vector2D};

/// Absolute tolerance used for float comparisons across the workspace.
pub const EPSILON: f64 = 1e-6;
