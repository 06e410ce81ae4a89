use euclid::{Point2D, Rotation2D, Transform2D, Vector2D};
use getset::CopyGetters;

use crate::Yaw;

/// Rotation followed by translation, mapping points expressed in `Src`
/// into `Dst`.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct RigidTransform<Src, Dst> {
    rotation: Rotation2D<f64, Src, Dst>,
    translation: Vector2D<f64, Dst>,
}

impl<Src, Dst> RigidTransform<Src, Dst> {
    pub fn new(rotation: Yaw, translation: Vector2D<f64, Dst>) -> Self {
        RigidTransform {
            rotation: Rotation2D::radians(rotation.rad()),
            translation,
        }
    }
    pub fn identity() -> Self {
        Self::new(Yaw::zero(), Vector2D::zero())
    }
    pub fn from_rotation(rotation: Yaw) -> Self {
        Self::new(rotation, Vector2D::zero())
    }
    pub fn from_translation(translation: Vector2D<f64, Dst>) -> Self {
        Self::new(Yaw::zero(), translation)
    }
    pub fn yaw(&self) -> Yaw {
        Yaw::from_rad(self.rotation.angle)
    }
    pub fn transform_point(&self, point: Point2D<f64, Src>) -> Point2D<f64, Dst> {
        self.rotation.transform_point(point) + self.translation
    }
    pub fn transform_vector(&self, vector: Vector2D<f64, Src>) -> Vector2D<f64, Dst> {
        self.rotation.transform_vector(vector)
    }
    pub fn inverse(&self) -> RigidTransform<Dst, Src> {
        let rotation = self.rotation.inverse();
        RigidTransform {
            rotation,
            translation: -rotation.transform_vector(self.translation),
        }
    }
    /// Applies `self`, then `other`.
    pub fn then<NewDst>(&self, other: &RigidTransform<Dst, NewDst>) -> RigidTransform<Src, NewDst> {
        RigidTransform {
            rotation: other.rotation.then(&self.rotation),
            translation: other.rotation.transform_vector(self.translation) + other.translation,
        }
    }
    pub fn to_transform(&self) -> Transform2D<f64, Src, Dst> {
        self.rotation.to_transform().then_translate(self.translation)
    }
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.yaw().smallest_angle_to(other.yaw()).rad().abs() <= epsilon
            && (self.translation - other.translation).length() <= epsilon
    }
}

impl<Src, Dst> Default for RigidTransform<Src, Dst> {
    fn default() -> Self {
        Self::identity()
    }
}

pub trait RigidlyTransformable<Src, Dst> {
    type Output;
    fn apply_rigid_transform(&self, tf: &RigidTransform<Src, Dst>) -> Self::Output;
}

impl<Src, Dst> RigidlyTransformable<Src, Dst> for Point2D<f64, Src> {
    type Output = Point2D<f64, Dst>;
    fn apply_rigid_transform(&self, tf: &RigidTransform<Src, Dst>) -> Self::Output {
        tf.transform_point(*self)
    }
}

impl<Src, Dst> RigidlyTransformable<Src, Dst> for Vector2D<f64, Src> {
    type Output = Vector2D<f64, Dst>;
    fn apply_rigid_transform(&self, tf: &RigidTransform<Src, Dst>) -> Self::Output {
        tf.transform_vector(*self)
    }
}
