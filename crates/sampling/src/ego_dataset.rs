use std::ops::Range;

use data::{ChunkedDataset, DataError, TrackSelector};
use derive_more::Deref;
use log::{debug, trace};
use rasterization::Rasterizer;

use crate::{generate_agent_sample, AgentSample, Config, Result, SampleParams};

/// One sample per frame of the log, centred on the ego vehicle.
pub struct EgoDataset {
    config: Config,
    dataset: ChunkedDataset,
    rasterizer: Box<dyn Rasterizer>,
    /// Exclusive end frame index of each scene, ascending.
    cumulative_sizes: Vec<usize>,
}

/// A sample together with where in the log it was taken.
#[derive(Clone, Debug, PartialEq, Deref)]
pub struct FrameSample {
    #[deref]
    pub sample: AgentSample,
    pub scene_index: usize,
    pub host: String,
    pub timestamp: u64,
    pub track: TrackSelector,
}

impl EgoDataset {
    pub fn new(
        config: Config,
        dataset: ChunkedDataset,
        rasterizer: Box<dyn Rasterizer>,
    ) -> Result<Self> {
        config.validate()?;
        let cumulative_sizes = dataset
            .scenes()
            .iter()
            .map(|scene| scene.frame_index_interval.end)
            .collect();
        debug!(
            "ego dataset over {} scenes, {} frames, {} future frames per sample",
            dataset.scenes().len(),
            dataset.frames().len(),
            config.model_params.future_num_frames
        );
        Ok(EgoDataset {
            config,
            dataset,
            rasterizer,
            cumulative_sizes,
        })
    }

    pub fn len(&self) -> usize {
        self.dataset.frames().len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dataset(&self) -> &ChunkedDataset {
        &self.dataset
    }

    /// Sample at a global frame index.
    pub fn get(&self, index: usize) -> Result<FrameSample> {
        if index >= self.len() {
            return Err(DataError::IndexOutOfRange {
                kind: "frame",
                index,
                len: self.len(),
            }
            .into());
        }
        let scene_index = self.cumulative_sizes.partition_point(|&end| end <= index);
        let scene = self.dataset.scene(scene_index)?;
        if !scene.frame_index_interval.contains(&index) {
            return Err(DataError::IndexOutOfRange {
                kind: "scene frame",
                index,
                len: self.len(),
            }
            .into());
        }
        let state_index = index - scene.frame_index_interval.start;
        self.get_frame(scene_index, state_index, TrackSelector::Ego)
    }

    /// Sample at `state_index` within a scene, for any track.
    pub fn get_frame(
        &self,
        scene_index: usize,
        state_index: usize,
        track: TrackSelector,
    ) -> Result<FrameSample> {
        let scene = self.dataset.scene(scene_index)?;
        let frames = self.dataset.frames_of(scene)?;
        trace!("sampling scene {scene_index} state {state_index} for {track:?}");
        let sample = generate_agent_sample(
            state_index,
            frames,
            self.dataset.agents(),
            track,
            &SampleParams::from(&self.config),
            self.rasterizer.as_ref(),
        )?;
        Ok(FrameSample {
            sample,
            scene_index,
            host: scene.host.clone(),
            timestamp: frames[state_index].timestamp,
            track,
        })
    }

    /// Global frame indices belonging to a scene.
    pub fn get_scene_indices(&self, scene_index: usize) -> Result<Range<usize>> {
        Ok(self.dataset.scene(scene_index)?.frame_index_interval.clone())
    }
}
