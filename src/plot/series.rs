use serde::{Deserialize, Serialize};

/// Plot smoothing settings, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Number of consecutive samples averaged into one plotted point.
    /// A window of 1 draws the raw curve.
    pub smoothing_window: usize,
    /// Draw a mean±std band around the smoothed line.
    pub show_variance: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            smoothing_window: 1,
            show_variance: true,
        }
    }
}

/// A loss (or accuracy) curve: (global step, value) samples in recording
/// order.
#[derive(Debug, Clone, Default)]
pub struct LossCurve {
    points: Vec<(f64, f64)>,
}

impl LossCurve {
    pub fn new() -> Self {
        LossCurve { points: Vec::new() }
    }

    pub fn from_points(points: Vec<(f64, f64)>) -> Self {
        LossCurve { points }
    }

    pub fn push(&mut self, step: u64, value: f64) {
        self.points.push((step as f64, value));
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Moving average over consecutive chunks of `window` samples, with a
    /// population-std band. Each chunk is plotted at the step of its center
    /// sample; trailing samples that do not fill a chunk are dropped.
    ///
    /// Returns `None` when `window < 2` or no full chunk fits, in which
    /// case callers should draw the raw curve.
    pub fn smoothed(&self, window: usize) -> Option<SmoothedCurve> {
        if window < 2 {
            return None;
        }
        let chunks = self.points.len() / window;
        if chunks == 0 {
            return None;
        }

        let mut mean = Vec::with_capacity(chunks);
        let mut upper = Vec::with_capacity(chunks);
        let mut lower = Vec::with_capacity(chunks);
        for i in 0..chunks {
            let chunk = &self.points[i * window..(i + 1) * window];
            let step = self.points[i * window + window / 2].0;

            let m = chunk.iter().map(|&(_, v)| v).sum::<f64>() / window as f64;
            let var =
                chunk.iter().map(|&(_, v)| (v - m) * (v - m)).sum::<f64>() / window as f64;
            let std = var.sqrt();

            mean.push((step, m));
            upper.push((step, m + std));
            lower.push((step, m - std));
        }

        Some(SmoothedCurve {
            window,
            mean,
            upper,
            lower,
        })
    }
}

/// Output of [`LossCurve::smoothed`]: the mean line plus mean±std band
/// points at the same steps.
#[derive(Debug, Clone)]
pub struct SmoothedCurve {
    pub window: usize,
    pub mean: Vec<(f64, f64)>,
    pub upper: Vec<(f64, f64)>,
    pub lower: Vec<(f64, f64)>,
}
