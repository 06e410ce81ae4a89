use data::{filter_agents_by_labels, Agent, FrameView};
use log::trace;

use crate::{RasterImage, RenderContext};

/// Renders the history of a scene around a reference agent.
pub trait Rasterizer: Send + Sync {
    /// `history_frames` are newest first; `agent` is `None` when the ego
    /// vehicle is the reference.
    fn rasterize(&self, history_frames: &[FrameView], agent: Option<&Agent>) -> RasterImage;
    fn num_channels(&self) -> usize;
    fn render_context(&self) -> &RenderContext;
}

/// Produces all-zero images of the configured size.
#[derive(Clone, Debug, PartialEq)]
pub struct StubRasterizer {
    render_context: RenderContext,
    filter_agents_threshold: f64,
}

impl StubRasterizer {
    pub fn new(render_context: RenderContext, filter_agents_threshold: f64) -> Self {
        StubRasterizer {
            render_context,
            filter_agents_threshold,
        }
    }
    /// Agents of a frame confident enough to be drawn.
    pub fn drawable_agents<'a>(&self, view: &FrameView<'a>) -> Vec<&'a Agent> {
        filter_agents_by_labels(view.agents, self.filter_agents_threshold)
    }
}

impl Rasterizer for StubRasterizer {
    fn rasterize(&self, history_frames: &[FrameView], agent: Option<&Agent>) -> RasterImage {
        let num_drawable: usize = history_frames
            .iter()
            .map(|view| self.drawable_agents(view).len())
            .sum();
        trace!(
            "stub rasterizing {} history frames with {} drawable agents for {:?}",
            history_frames.len(),
            num_drawable,
            agent.map(|a| a.track_id)
        );
        let size = self.render_context.raster_size_px();
        RasterImage::zeros(size.width as usize, size.height as usize, self.num_channels())
    }
    fn num_channels(&self) -> usize {
        2
    }
    fn render_context(&self) -> &RenderContext {
        &self.render_context
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use geometry::{deg, yaw_as_rotation33};

    use super::*;
    use data::{Frame, PerceptionLabel};

    #[test]
    fn test_drawable_agents_respect_threshold() {
        let frame = Frame {
            timestamp: 0,
            agent_index_interval: 0..3,
            ego_translation: [0.0; 3],
            ego_rotation: yaw_as_rotation33(deg(0.0)),
        };
        let mut uncertain = Agent::new(3, [2.0, 0.0], 0.0, PerceptionLabel::Car);
        uncertain.label_probabilities[PerceptionLabel::Car.index()] = 0.2;
        let agents = [
            Agent::new(1, [0.0, 0.0], 0.0, PerceptionLabel::Car),
            Agent::new(2, [1.0, 0.0], 0.0, PerceptionLabel::Unknown),
            uncertain,
        ];
        let view = FrameView { frame: &frame, agents: &agents };
        let ctx = RenderContext::new((10, 10), (0.5, 0.5), (0.5, 0.5)).unwrap();

        let ids = |threshold| {
            StubRasterizer::new(ctx, threshold)
                .drawable_agents(&view)
                .iter()
                .map(|a| a.track_id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(0.5), vec![1]);
        assert_eq!(ids(0.1), vec![1, 3]);
    }

    #[test]
    fn test_stub_shape_is_height_width_channels() {
        let ctx = RenderContext::new((100, 50), (0.5, 0.5), (0.5, 0.5)).unwrap();
        let image = StubRasterizer::new(ctx, 0.5).rasterize(&[], None);
        assert_eq!(image.shape(), (50, 100, 2));
        assert!(image.data().iter().all(|&v| v == 0.0));
        assert_eq!(image.get(99, 49, 1), Some(0.0));
        assert_eq!(image.get(100, 0, 0), None);
    }
}
