//! Turns a trajectory log into prediction samples: future and history
//! targets expressed in the reference agent's frame, plus a raster.

pub mod agent_sampling;
pub use agent_sampling::{
    compute_displacement, compute_padded_displacement, generate_agent_sample, AgentSample,
    Displacement, SampleParams,
};

pub mod config;
pub use config::{Config, ModelParams, RasterParams};

pub mod ego_dataset;
pub use ego_dataset::{EgoDataset, FrameSample};

mod error;
pub use error::{Result, SamplingError};
