//! Index windows around a state index. Windows are clipped to the frames
//! that exist, so callers must pad when they need a fixed length.

use itertools::Itertools;

/// Frame indices before `state_index`, newest first.
pub fn get_history_slice(
    state_index: usize,
    num_frames: usize,
    step_size: usize,
    include_current_state: bool,
) -> Vec<usize> {
    let first = if include_current_state { 0 } else { 1 };
    (first..=num_frames)
        .map(|k| k * step_size)
        .take_while(|&offset| offset <= state_index)
        .map(|offset| state_index - offset)
        .collect_vec()
}

/// Frame indices after `state_index`, oldest first, below `len`.
pub fn get_future_slice(
    state_index: usize,
    num_frames: usize,
    step_size: usize,
    len: usize,
) -> Vec<usize> {
    (1..=num_frames)
        .map(|k| state_index + k * step_size)
        .take_while(|&i| i < len)
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_history_with_current() {
        assert_eq!(get_history_slice(5, 2, 1, true), vec![5, 4, 3]);
        assert_eq!(get_history_slice(5, 2, 2, true), vec![5, 3, 1]);
    }

    #[test]
    fn test_history_without_current() {
        assert_eq!(get_history_slice(5, 2, 1, false), vec![4, 3]);
    }

    #[test]
    fn test_history_clipped_at_start() {
        assert_eq!(get_history_slice(1, 4, 1, true), vec![1, 0]);
        assert_eq!(get_history_slice(0, 3, 1, false), Vec::<usize>::new());
    }

    #[test]
    fn test_future() {
        assert_eq!(get_future_slice(0, 3, 1, 10), vec![1, 2, 3]);
        assert_eq!(get_future_slice(2, 3, 3, 100), vec![5, 8, 11]);
    }

    #[test]
    fn test_future_clipped_at_end() {
        assert_eq!(get_future_slice(7, 5, 1, 10), vec![8, 9]);
        assert_eq!(get_future_slice(9, 5, 1, 10), Vec::<usize>::new());
    }
}
