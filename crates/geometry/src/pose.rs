use getset::CopyGetters;

use crate::{
    world_point_from_translation3, yaw_from_rotation33, AgentFrame, GeometryError, Matrix3,
    RigidTransform, WorldFrame, WorldPoint, Yaw,
};

/// Position and heading of an agent in the world frame.
#[derive(Clone, Copy, Debug, PartialEq, Default, CopyGetters)]
#[get_copy = "pub"]
pub struct Pose {
    translation: WorldPoint,
    yaw: Yaw,
}

impl Pose {
    pub fn new(translation: WorldPoint, yaw: Yaw) -> Result<Self, GeometryError> {
        if !translation.x.is_finite() || !translation.y.is_finite() {
            return Err(GeometryError::InvalidPose(format!(
                "non-finite translation {translation:?}"
            )));
        }
        if !yaw.is_finite() {
            return Err(GeometryError::InvalidPose(format!("non-finite yaw {yaw:?}")));
        }
        Ok(Pose { translation, yaw })
    }
    /// From a 3D translation and 3x3 rotation as stored in a log frame.
    pub fn from_translation3_and_rotation33(
        translation: [f64; 3],
        rotation: &Matrix3,
    ) -> Result<Self, GeometryError> {
        Self::new(
            world_point_from_translation3(translation),
            yaw_from_rotation33(rotation)?,
        )
    }
    pub fn world_from_agent(&self) -> RigidTransform<AgentFrame, WorldFrame> {
        RigidTransform::new(self.yaw, self.translation.to_vector())
    }
    pub fn agent_from_world(&self) -> RigidTransform<WorldFrame, AgentFrame> {
        self.world_from_agent().inverse()
    }
}
