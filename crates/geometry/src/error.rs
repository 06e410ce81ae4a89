use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid pose: {0}")]
    InvalidPose(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
