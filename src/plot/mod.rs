mod render;
mod series;

pub use render::render_loss_chart;
pub use series::{LossCurve, PlotConfig, SmoothedCurve};
