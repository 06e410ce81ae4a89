use data::DataError;
use geometry::GeometryError;
use rasterization::RasterizationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplingError {
    /// Malformed rotation or translation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Rasterization(#[from] RasterizationError),

    /// Non-positive or mismatched frame-window length.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The selected track has no usable observation in the reference frame.
    #[error("track {track_id} not in frame {state_index} or below label threshold {threshold}")]
    MissingTrack {
        track_id: u64,
        state_index: usize,
        threshold: f64,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SamplingError {
    fn from(e: toml::de::Error) -> Self {
        SamplingError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SamplingError>;
