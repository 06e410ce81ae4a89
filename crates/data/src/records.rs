use std::ops::Range;

use geometry::{world_point_from_array, GeometryError, Matrix3, Pose, Yaw};
use crate::{filter_agents_by_track_id, DataError, PerceptionLabel, NUM_PERCEPTION_LABELS};

/// Length, width and height of the ego vehicle in metres.
pub const EGO_EXTENT: [f64; 3] = [4.869, 1.852, 1.476];

/// Selects whose trajectory is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrackSelector {
    #[default]
    Ego,
    Agent(u64),
}

impl TrackSelector {
    pub fn track_id(&self) -> Option<u64> {
        match self {
            TrackSelector::Ego => None,
            TrackSelector::Agent(id) => Some(*id),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub frame_index_interval: Range<usize>,
    pub host: String,
    pub start_time: u64,
    pub end_time: u64,
}

impl Scene {
    pub fn num_frames(&self) -> usize {
        self.frame_index_interval.len()
    }
}

/// One timestep of the log.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Nanoseconds.
    pub timestamp: u64,
    pub agent_index_interval: Range<usize>,
    pub ego_translation: [f64; 3],
    pub ego_rotation: Matrix3,
}

impl Frame {
    pub fn ego_pose(&self) -> Result<Pose, GeometryError> {
        Pose::from_translation3_and_rotation33(self.ego_translation, &self.ego_rotation)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    /// Ids start at 1; 0 is never a valid track.
    pub track_id: u64,
    pub centroid: [f64; 2],
    pub extent: [f64; 3],
    pub yaw: f64,
    pub velocity: [f64; 2],
    pub label_probabilities: [f32; NUM_PERCEPTION_LABELS],
}

impl Agent {
    /// An agent labelled with full confidence as `label`.
    pub fn new(track_id: u64, centroid: [f64; 2], yaw: f64, label: PerceptionLabel) -> Self {
        let mut label_probabilities = [0.0; NUM_PERCEPTION_LABELS];
        label_probabilities[label.index()] = 1.0;
        Agent {
            track_id,
            centroid,
            extent: [4.0, 2.0, 1.5],
            yaw,
            velocity: [0.0, 0.0],
            label_probabilities,
        }
    }
    pub fn label_probability(&self, label: PerceptionLabel) -> f32 {
        self.label_probabilities[label.index()]
    }
    pub fn pose(&self) -> Result<Pose, GeometryError> {
        Pose::new(world_point_from_array(self.centroid), Yaw::from_rad(self.yaw))
    }
}

/// A frame together with the agents observed in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameView<'a> {
    pub frame: &'a Frame,
    pub agents: &'a [Agent],
}

impl<'a> FrameView<'a> {
    /// Pairs `frame` with its slice of a whole agent table, failing when
    /// the frame's interval does not fit that table.
    pub fn from_agent_table(frame: &'a Frame, agents: &'a [Agent]) -> Result<Self, DataError> {
        let interval = frame.agent_index_interval.clone();
        let frame_agents = agents
            .get(interval.clone())
            .ok_or(DataError::IntervalOutOfBounds {
                kind: "frame agent",
                interval,
                len: agents.len(),
            })?;
        Ok(FrameView {
            frame,
            agents: frame_agents,
        })
    }

    pub fn agent(&self, track_id: u64) -> Option<&'a Agent> {
        filter_agents_by_track_id(self.agents, track_id)
            .into_iter()
            .next()
    }
}

#[cfg(test)]
mod tests {
    use geometry::{deg, yaw_as_rotation33};
    use ntest::assert_about_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ego_pose_reads_translation_and_rotation() {
        let frame = Frame {
            timestamp: 0,
            agent_index_interval: 0..0,
            ego_translation: [1.0, 2.0, 3.0],
            ego_rotation: yaw_as_rotation33(deg(45.0)),
        };
        let pose = frame.ego_pose().unwrap();
        assert_about_eq!(pose.translation().x, 1.0);
        assert_about_eq!(pose.translation().y, 2.0);
        assert_about_eq!(pose.yaw().deg(), 45.0, 1e-9);
    }

    #[test]
    fn test_frame_view_finds_agent_by_track() {
        let frame = Frame {
            timestamp: 0,
            agent_index_interval: 0..2,
            ego_translation: [0.0; 3],
            ego_rotation: yaw_as_rotation33(deg(0.0)),
        };
        let agents = [
            Agent::new(3, [1.0, 1.0], 0.0, PerceptionLabel::Car),
            Agent::new(7, [2.0, 2.0], 0.0, PerceptionLabel::Pedestrian),
        ];
        let view = FrameView { frame: &frame, agents: &agents };
        assert_eq!(view.agent(7).map(|a| a.centroid), Some([2.0, 2.0]));
        assert_eq!(view.agent(4), None);
    }

    #[test]
    fn test_frame_view_from_agent_table_checks_interval() {
        let mut frame = Frame {
            timestamp: 0,
            agent_index_interval: 1..2,
            ego_translation: [0.0; 3],
            ego_rotation: yaw_as_rotation33(deg(0.0)),
        };
        let agents = [
            Agent::new(3, [1.0, 1.0], 0.0, PerceptionLabel::Car),
            Agent::new(7, [2.0, 2.0], 0.0, PerceptionLabel::Pedestrian),
        ];
        let view = FrameView::from_agent_table(&frame, &agents).unwrap();
        assert_eq!(view.agents.len(), 1);
        assert_eq!(view.agent(7).map(|a| a.centroid), Some([2.0, 2.0]));

        frame.agent_index_interval = 1..4;
        assert_eq!(
            FrameView::from_agent_table(&frame, &agents),
            Err(DataError::IntervalOutOfBounds {
                kind: "frame agent",
                interval: 1..4,
                len: 2
            })
        );
    }

    #[test]
    fn test_track_selector() {
        assert_eq!(TrackSelector::default(), TrackSelector::Ego);
        assert_eq!(TrackSelector::Ego.track_id(), None);
        assert_eq!(TrackSelector::Agent(9).track_id(), Some(9));
    }
}
