use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterizationError {
    #[error("invalid render context: {0}")]
    InvalidRenderContext(String),
}

pub type Result<T> = std::result::Result<T, RasterizationError>;
