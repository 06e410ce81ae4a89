use std::ops::Range;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("{kind} interval {interval:?} out of bounds for table of length {len}")]
    IntervalOutOfBounds {
        kind: &'static str,
        interval: Range<usize>,
        len: usize,
    },
    #[error("scene {scene_index} spans {interval:?} but should start at frame {expected_start}")]
    NonContiguousScene {
        scene_index: usize,
        interval: Range<usize>,
        expected_start: usize,
    },
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
