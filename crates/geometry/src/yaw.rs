use std::f64::consts::{PI, TAU};

use derive_more::{Add, Neg, Sub};

/// Heading angle in radians, counter-clockwise from the world x axis.
#[derive(Default, Debug, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Neg)]
pub struct Yaw(f64);

impl Yaw {
    pub fn zero() -> Self {
        Self(0.0)
    }
    pub fn from_rad(x: f64) -> Self {
        Self(x)
    }
    pub fn from_deg(x: f64) -> Self {
        Self(x.to_radians())
    }
    pub fn from_turns(x: f64) -> Self {
        Self::from_rad(x * TAU)
    }
    pub fn rad(&self) -> f64 {
        self.0
    }
    pub fn deg(&self) -> f64 {
        self.0.to_degrees()
    }
    pub fn sin(&self) -> f64 {
        self.rad().sin()
    }
    pub fn cos(&self) -> f64 {
        self.rad().cos()
    }
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
    /// Wraps into (-π, π].
    pub fn standardized_centered_at_zero(&self) -> Self {
        let r = self.rad().rem_euclid(TAU);
        Self::from_rad(if r > PI { r - TAU } else { r })
    }
    /// Signed difference `other - self`, wrapped into (-π, π].
    pub fn smallest_angle_to(&self, other: Self) -> Self {
        (other - *self).standardized_centered_at_zero()
    }
}

impl From<f64> for Yaw {
    fn from(value: f64) -> Self {
        Self::from_rad(value)
    }
}

pub fn deg(x: f64) -> Yaw {
    Yaw::from_deg(x)
}
