//! Target extraction and per-agent sample generation.

use euclid::Transform2D;
use geometry::{
    AgentFrame, AgentMove, Pose, RasterFrame, RigidTransform, RigidlyTransformable, WorldFrame,
    WorldPoint, Yaw,
};
use itertools::Itertools;
use log::{debug, trace};

use data::slicing::{get_future_slice, get_history_slice};
use data::{filter_agents_by_labels, Agent, Frame, FrameView, TrackSelector, EGO_EXTENT};
use rasterization::{RasterImage, Rasterizer};

use crate::{Config, Result, SamplingError};

/// Positions and headings of a target relative to a reference pose, one
/// entry per timestep. Unavailable entries hold zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct Displacement {
    pub positions: Vec<AgentMove>,
    pub yaws: Vec<Yaw>,
    pub availabilities: Vec<bool>,
}

impl Displacement {
    fn unavailable(num_frames: usize) -> Self {
        Displacement {
            positions: vec![AgentMove::zero(); num_frames],
            yaws: vec![Yaw::zero(); num_frames],
            availabilities: vec![false; num_frames],
        }
    }
    pub fn len(&self) -> usize {
        self.positions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
    /// Same mask, and available positions and yaws within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.availabilities == other.availabilities
            && self
                .positions
                .iter()
                .zip_eq(&other.positions)
                .zip_eq(self.yaws.iter().zip_eq(&other.yaws))
                .zip_eq(&self.availabilities)
                .filter(|(_, available)| **available)
                .all(|(((pa, pb), (ya, yb)), _)| {
                    (*pa - *pb).length() <= epsilon
                        && ya.smallest_angle_to(*yb).rad().abs() <= epsilon
                })
    }
}

/// Expresses the target's position in each of `future_frames` in the local
/// frame of `reference`. A frame in which an agent track is not observed
/// yields an unavailable entry rather than an error.
pub fn compute_displacement(
    reference: &Pose,
    future_frames: &[FrameView],
    track: TrackSelector,
) -> Result<Displacement> {
    if future_frames.is_empty() {
        return Err(SamplingError::InvalidInput(
            "future frame window is empty".to_string(),
        ));
    }
    compute_padded_displacement(future_frames.len(), future_frames, track, reference)
}

/// Like [`compute_displacement`], for a window of `num_frames` of which
/// only the leading `frames.len()` exist (the rest lie past the end of the
/// scene and stay unavailable).
pub fn compute_padded_displacement(
    num_frames: usize,
    frames: &[FrameView],
    track: TrackSelector,
    reference: &Pose,
) -> Result<Displacement> {
    if num_frames == 0 {
        return Err(SamplingError::InvalidInput(
            "window length must be at least 1".to_string(),
        ));
    }
    if frames.len() > num_frames {
        return Err(SamplingError::InvalidInput(format!(
            "{} frames given for a window of {num_frames}",
            frames.len()
        )));
    }

    let agent_from_world = reference.agent_from_world();
    let mut displacement = Displacement::unavailable(num_frames);
    for (i, view) in frames.iter().enumerate() {
        let target = match track {
            TrackSelector::Ego => Some(view.frame.ego_pose()?),
            TrackSelector::Agent(track_id) => view.agent(track_id).map(Agent::pose).transpose()?,
        };
        match target {
            Some(target) => {
                displacement.positions[i] = target
                    .translation()
                    .apply_rigid_transform(&agent_from_world)
                    .to_vector();
                displacement.yaws[i] = reference.yaw().smallest_angle_to(target.yaw());
                displacement.availabilities[i] = true;
            }
            None => trace!("{track:?} not observed at step {i}"),
        }
    }
    Ok(displacement)
}

/// The parts of a [`Config`] that shape a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleParams {
    pub history_num_frames: usize,
    pub history_step_size: usize,
    pub future_num_frames: usize,
    pub future_step_size: usize,
    pub filter_agents_threshold: f64,
}

impl From<&Config> for SampleParams {
    fn from(config: &Config) -> Self {
        SampleParams {
            history_num_frames: config.model_params.history_num_frames,
            history_step_size: config.model_params.history_step_size,
            future_num_frames: config.model_params.future_num_frames,
            future_step_size: config.model_params.future_step_size,
            filter_agents_threshold: config.raster_params.filter_agents_threshold,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AgentSample {
    pub image: RasterImage,
    pub target_positions: Vec<AgentMove>,
    pub target_yaws: Vec<Yaw>,
    pub target_availabilities: Vec<bool>,
    /// Newest first; entry 0 is the reference state itself.
    pub history_positions: Vec<AgentMove>,
    pub history_yaws: Vec<Yaw>,
    pub history_availabilities: Vec<bool>,
    pub raster_from_world: Transform2D<f64, WorldFrame, RasterFrame>,
    pub raster_from_agent: Transform2D<f64, AgentFrame, RasterFrame>,
    pub agent_from_world: RigidTransform<WorldFrame, AgentFrame>,
    pub world_from_agent: RigidTransform<AgentFrame, WorldFrame>,
    pub centroid: WorldPoint,
    pub yaw: Yaw,
    pub extent: [f64; 3],
}

fn frame_views<'a>(
    indices: &[usize],
    frames: &'a [Frame],
    agents: &'a [Agent],
) -> Result<Vec<FrameView<'a>>> {
    indices
        .iter()
        .map(|&i| Ok(FrameView::from_agent_table(&frames[i], agents)?))
        .collect()
}

/// Builds the sample for `track` at `state_index` of a scene. `frames` are
/// the scene's frames and `agents` the table their intervals index into.
pub fn generate_agent_sample(
    state_index: usize,
    frames: &[Frame],
    agents: &[Agent],
    track: TrackSelector,
    params: &SampleParams,
    rasterizer: &dyn Rasterizer,
) -> Result<AgentSample> {
    if state_index >= frames.len() {
        return Err(SamplingError::InvalidInput(format!(
            "state index {state_index} outside scene of {} frames",
            frames.len()
        )));
    }
    if params.future_num_frames == 0 {
        return Err(SamplingError::InvalidInput(
            "future_num_frames must be at least 1".to_string(),
        ));
    }

    let history_indices = get_history_slice(
        state_index,
        params.history_num_frames,
        params.history_step_size,
        true,
    );
    let future_indices = get_future_slice(
        state_index,
        params.future_num_frames,
        params.future_step_size,
        frames.len(),
    );
    let history = frame_views(&history_indices, frames, agents)?;
    let future = frame_views(&future_indices, frames, agents)?;
    if future.len() < params.future_num_frames {
        debug!(
            "state {state_index}: only {} of {} future frames available",
            future.len(),
            params.future_num_frames
        );
    }

    let current = history[0];
    let (reference, extent, selected_agent) = match track {
        TrackSelector::Ego => (current.frame.ego_pose()?, EGO_EXTENT, None),
        TrackSelector::Agent(track_id) => {
            let agent = filter_agents_by_labels(current.agents, params.filter_agents_threshold)
                .into_iter()
                .find(|a| a.track_id == track_id)
                .ok_or(SamplingError::MissingTrack {
                    track_id,
                    state_index,
                    threshold: params.filter_agents_threshold,
                })?;
            (agent.pose()?, agent.extent, Some(agent))
        }
    };

    let render_context = rasterizer.render_context();
    let image = rasterizer.rasterize(&history, selected_agent);

    let targets = compute_padded_displacement(params.future_num_frames, &future, track, &reference)?;
    let past = compute_padded_displacement(
        params.history_num_frames + 1,
        &history,
        track,
        &reference,
    )?;
    trace!(
        "sampled {track:?} at state {state_index}: {} of {} targets available",
        targets.availabilities.iter().filter(|&&a| a).count(),
        targets.len()
    );

    Ok(AgentSample {
        image,
        target_positions: targets.positions,
        target_yaws: targets.yaws,
        target_availabilities: targets.availabilities,
        history_positions: past.positions,
        history_yaws: past.yaws,
        history_availabilities: past.availabilities,
        raster_from_world: render_context.raster_from_world(&reference),
        raster_from_agent: render_context.raster_from_local(),
        agent_from_world: reference.agent_from_world(),
        world_from_agent: reference.world_from_agent(),
        centroid: reference.translation(),
        yaw: reference.yaw(),
        extent,
    })
}
