//! In-memory trajectory log: scenes, frames and the agents tracked in them.

mod labels;
pub use labels::*;

mod records;
pub use records::*;

mod chunked_dataset;
pub use chunked_dataset::*;

mod filter;
pub use filter::*;

pub mod slicing;

mod error;
pub use error::{DataError, Result};
