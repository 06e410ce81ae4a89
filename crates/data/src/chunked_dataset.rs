use std::ops::Range;

use getset::Getters;
use log::debug;

use geometry::Matrix3;

use crate::{Agent, DataError, Frame, FrameView, Result, Scene};

/// Scenes, frames and agents of a log, held as three flat tables. Scenes
/// index into frames and frames index into agents.
#[derive(Clone, Debug, Default, PartialEq, Getters)]
#[get = "pub"]
pub struct ChunkedDataset {
    scenes: Vec<Scene>,
    frames: Vec<Frame>,
    agents: Vec<Agent>,
}

/// Everything needed to append one frame to a dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRecord {
    pub timestamp: u64,
    pub ego_translation: [f64; 3],
    pub ego_rotation: Matrix3,
    pub agents: Vec<Agent>,
}

fn check_interval(kind: &'static str, interval: &Range<usize>, len: usize) -> Result<()> {
    if interval.start > interval.end || interval.end > len {
        return Err(DataError::IntervalOutOfBounds {
            kind,
            interval: interval.clone(),
            len,
        });
    }
    Ok(())
}

impl ChunkedDataset {
    pub fn new(scenes: Vec<Scene>, frames: Vec<Frame>, agents: Vec<Agent>) -> Result<Self> {
        // scenes tile the frame table in order, starting at frame 0
        let mut expected_start = 0;
        for (scene_index, scene) in scenes.iter().enumerate() {
            let interval = &scene.frame_index_interval;
            check_interval("scene frame", interval, frames.len())?;
            if interval.start != expected_start {
                return Err(DataError::NonContiguousScene {
                    scene_index,
                    interval: interval.clone(),
                    expected_start,
                });
            }
            expected_start = interval.end;
        }
        for frame in &frames {
            check_interval("frame agent", &frame.agent_index_interval, agents.len())?;
        }
        debug!(
            "loaded dataset with {} scenes, {} frames, {} agents",
            scenes.len(),
            frames.len(),
            agents.len()
        );
        Ok(ChunkedDataset {
            scenes,
            frames,
            agents,
        })
    }

    /// Appends a scene, assigning frame and agent intervals contiguously.
    pub fn append_scene(&mut self, host: &str, records: Vec<FrameRecord>) -> usize {
        let first_frame = self.frames.len();
        let start_time = records.first().map_or(0, |r| r.timestamp);
        let end_time = records.last().map_or(0, |r| r.timestamp);
        for record in records {
            let first_agent = self.agents.len();
            self.agents.extend(record.agents);
            self.frames.push(Frame {
                timestamp: record.timestamp,
                agent_index_interval: first_agent..self.agents.len(),
                ego_translation: record.ego_translation,
                ego_rotation: record.ego_rotation,
            });
        }
        self.scenes.push(Scene {
            frame_index_interval: first_frame..self.frames.len(),
            host: host.to_string(),
            start_time,
            end_time,
        });
        self.scenes.len() - 1
    }

    pub fn scene(&self, scene_index: usize) -> Result<&Scene> {
        self.scenes.get(scene_index).ok_or(DataError::IndexOutOfRange {
            kind: "scene",
            index: scene_index,
            len: self.scenes.len(),
        })
    }

    pub fn scene_frames(&self, scene_index: usize) -> Result<&[Frame]> {
        self.frames_of(self.scene(scene_index)?)
    }

    /// Frames of a scene already looked up.
    pub fn frames_of(&self, scene: &Scene) -> Result<&[Frame]> {
        let interval = scene.frame_index_interval.clone();
        self.frames
            .get(interval.clone())
            .ok_or(DataError::IntervalOutOfBounds {
                kind: "scene frame",
                interval,
                len: self.frames.len(),
            })
    }

    pub fn frame_agents<'a>(&'a self, frame: &'a Frame) -> Result<&'a [Agent]> {
        Ok(self.frame_view(frame)?.agents)
    }

    pub fn frame_view<'a>(&'a self, frame: &'a Frame) -> Result<FrameView<'a>> {
        FrameView::from_agent_table(frame, &self.agents)
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use geometry::{deg, yaw_as_rotation33};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::PerceptionLabel;

    fn record(timestamp: u64, x: f64, num_agents: u64) -> FrameRecord {
        FrameRecord {
            timestamp,
            ego_translation: [x, 0.0, 0.0],
            ego_rotation: yaw_as_rotation33(deg(0.0)),
            agents: (1..=num_agents)
                .map(|id| Agent::new(id, [x, id as f64], 0.0, PerceptionLabel::Car))
                .collect(),
        }
    }

    #[test]
    fn test_append_scene_assigns_contiguous_intervals() {
        let mut dataset = ChunkedDataset::default();
        dataset.append_scene("host-a", vec![record(10, 0.0, 2), record(20, 1.0, 1)]);
        let second = dataset.append_scene("host-b", vec![record(30, 2.0, 3)]);

        assert_eq!(second, 1);
        assert_eq!(dataset.scenes()[0].frame_index_interval, 0..2);
        assert_eq!(dataset.scenes()[1].frame_index_interval, 2..3);
        assert_eq!(dataset.frames()[1].agent_index_interval, 2..3);
        assert_eq!(dataset.frames()[2].agent_index_interval, 3..6);
        assert_eq!(dataset.scenes()[0].start_time, 10);
        assert_eq!(dataset.scenes()[0].end_time, 20);
        assert_eq!(dataset.frame_agents(&dataset.frames()[2]).unwrap().len(), 3);
    }

    #[test]
    fn test_new_rejects_dangling_agent_interval() {
        let mut dataset = ChunkedDataset::default();
        dataset.append_scene("host", vec![record(0, 0.0, 2)]);
        let mut frames = dataset.frames().clone();
        frames[0].agent_index_interval = 0..5;
        let result = ChunkedDataset::new(dataset.scenes().clone(), frames, dataset.agents().clone());
        assert_eq!(
            result,
            Err(DataError::IntervalOutOfBounds {
                kind: "frame agent",
                interval: 0..5,
                len: 2
            })
        );
    }

    fn scenes_over(dataset: &ChunkedDataset, intervals: &[Range<usize>]) -> Vec<Scene> {
        intervals
            .iter()
            .map(|interval| Scene {
                frame_index_interval: interval.clone(),
                ..dataset.scenes()[0].clone()
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_scenes_that_do_not_tile_the_frames() {
        let mut dataset = ChunkedDataset::default();
        dataset.append_scene("host", (0..5).map(|i| record(i, i as f64, 1)).collect());
        let rebuild = |intervals: &[Range<usize>]| {
            ChunkedDataset::new(
                scenes_over(&dataset, intervals),
                dataset.frames().clone(),
                dataset.agents().clone(),
            )
        };

        assert!(rebuild(&[0..2, 2..5]).is_ok());
        // gap, overlap, out of order, not starting at zero
        [
            (vec![0..2, 3..5], 1, 3..5, 2),
            (vec![0..3, 2..5], 1, 2..5, 3),
            (vec![2..5, 0..2], 0, 2..5, 0),
            (vec![1..5], 0, 1..5, 0),
        ]
        .into_iter()
        .for_each(|(intervals, scene_index, interval, expected_start)| {
            assert_eq!(
                rebuild(&intervals),
                Err(DataError::NonContiguousScene {
                    scene_index,
                    interval,
                    expected_start
                })
            );
        });
    }

    #[test]
    fn test_frame_from_another_dataset_is_an_error() {
        let mut small = ChunkedDataset::default();
        small.append_scene("host", vec![record(0, 0.0, 1)]);
        let mut large = ChunkedDataset::default();
        large.append_scene("host", vec![record(0, 0.0, 2), record(1, 1.0, 4)]);

        let foreign = &large.frames()[1];
        assert_eq!(
            small.frame_view(foreign),
            Err(DataError::IntervalOutOfBounds {
                kind: "frame agent",
                interval: 2..6,
                len: 1
            })
        );
        assert!(small.frame_agents(foreign).is_err());
    }

    #[test]
    fn test_missing_scene_is_an_error() {
        let dataset = ChunkedDataset::default();
        assert!(dataset.scene_frames(0).is_err());
    }
}
