/// Row-major `height x width x channels` image.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f32>,
}

impl RasterImage {
    pub fn zeros(width: usize, height: usize, channels: usize) -> Self {
        RasterImage {
            width,
            height,
            channels,
            data: vec![0.0; width * height * channels],
        }
    }
    /// (height, width, channels)
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels)
    }
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<f32> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        self.data
            .get((y * self.width + x) * self.channels + channel)
            .copied()
    }
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
