use serde::{
    Deserialize,
    Serialize,
};

/// Parameters of the sample grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_start")]
    pub start: f64,

    #[serde(default = "default_end")]
    pub end: f64,

    #[serde(default = "default_samples")]
    pub samples: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            samples: default_samples(),
        }
    }
}

fn default_start() -> f64 {
    0.0
}

fn default_end() -> f64 {
    20.0
}

fn default_samples() -> usize {
    2000
}

/// Evenly spaced, monotonically increasing samples. Both ends are included.
///
/// The same values serve as the spatial axis of the plot and as the elapsed
/// time of each animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    values: Vec<f64>,
}

impl TimeGrid {
    pub fn linspace(start: f64, end: f64, samples: usize) -> Self {
        // a grid always has at least one point, so frame 0 is always valid
        let samples = samples.max(1);

        let values = if samples == 1 {
            vec![start]
        }
        else {
            let step = (end - start) / (samples - 1) as f64;
            (0..samples).map(|i| start + i as f64 * step).collect()
        };

        Self { values }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::linspace(config.start, config.end, config.samples)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn start(&self) -> f64 {
        self.values[0]
    }

    pub fn end(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Elapsed time at `frame`. Frames past the end are clamped.
    pub fn time_at(&self, frame: usize) -> f64 {
        self.values[self.clamp_frame(frame)]
    }

    pub fn clamp_frame(&self, frame: usize) -> usize {
        frame.min(self.values.len() - 1)
    }

    /// Frame after `frame`, wrapping to 0 at the end of the grid.
    pub fn next_frame(&self, frame: usize) -> usize {
        (frame + 1) % self.values.len()
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::TimeGrid;

    #[test]
    fn default_grid_spans_zero_to_twenty() {
        let grid = TimeGrid::default();
        assert_eq!(grid.len(), 2000);
        assert_eq!(grid.start(), 0.0);
        assert!((grid.end() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn it_is_monotonic() {
        let grid = TimeGrid::linspace(-1.0, 3.0, 9);
        assert!(grid.values().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(grid.values()[4], 1.0);
    }

    #[test]
    fn single_sample_grid() {
        let grid = TimeGrid::linspace(5.0, 10.0, 0);
        assert_eq!(grid.values(), &[5.0]);
        assert_eq!(grid.next_frame(0), 0);
    }

    #[test]
    fn frames_wrap_around() {
        let grid = TimeGrid::linspace(0.0, 1.0, 3);
        assert_eq!(grid.next_frame(0), 1);
        assert_eq!(grid.next_frame(1), 2);
        assert_eq!(grid.next_frame(2), 0);
    }

    #[test]
    fn time_is_clamped() {
        let grid = TimeGrid::linspace(0.0, 1.0, 3);
        assert_eq!(grid.time_at(1), 0.5);
        assert_eq!(grid.time_at(100), 1.0);
    }
}
