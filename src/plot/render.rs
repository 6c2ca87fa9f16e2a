use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use super::series::{LossCurve, PlotConfig};

/// Render a loss curve as a terminal chart.
///
/// With a smoothing window >= 2 (and variance enabled) the moving-average
/// line is drawn together with a mean±std band; otherwise the raw samples
/// are drawn directly.
pub fn render_loss_chart(
    frame: &mut Frame,
    curve: &LossCurve,
    config: &PlotConfig,
    title: &str,
    area: Rect,
) {
    let smoothed = if config.show_variance {
        curve.smoothed(config.smoothing_window)
    } else {
        None
    };

    let mut datasets = Vec::new();
    let mut plotted: Vec<&[(f64, f64)]> = Vec::new();

    if let Some(s) = &smoothed {
        datasets.push(
            Dataset::default()
                .name(format!("{title} (mean over {} steps)", s.window))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&s.mean),
        );
        datasets.push(
            Dataset::default()
                .name(format!("{title} variance over {} steps", s.window))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&s.upper),
        );
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&s.lower),
        );
        plotted.push(&s.mean);
        plotted.push(&s.upper);
        plotted.push(&s.lower);
    } else if !curve.is_empty() {
        datasets.push(
            Dataset::default()
                .name(title.to_string())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(curve.points()),
        );
        plotted.push(curve.points());
    }

    let (x_min, x_max) = x_bounds(&plotted);
    let (y_min, y_max) = y_bounds(&plotted);

    let x_labels = vec![
        Span::raw(format!("{}", x_min as i64)),
        Span::raw(format!("{}", x_max as i64)),
    ];
    let y_labels = vec![
        Span::raw(format!("{y_min:.2}")),
        Span::raw(format!("{y_max:.2}")),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .x_axis(
            Axis::default()
                .title("Step")
                .labels(x_labels)
                .bounds([x_min, x_max]),
        )
        .y_axis(
            Axis::default()
                .title(title.to_string())
                .labels(y_labels)
                .bounds([y_min, y_max]),
        );

    frame.render_widget(chart, area);
}

/// Compute x-axis bounds over all plotted series.
fn x_bounds(series: &[&[(f64, f64)]]) -> (f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for points in series {
        for &(x, _) in *points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
        }
    }
    if !x_min.is_finite() {
        return (0.0, 1.0);
    }
    (x_min, x_max.max(x_min + 1.0))
}

/// Compute y-axis bounds over all plotted series, padded to the nearest 0.1.
fn y_bounds(series: &[&[(f64, f64)]]) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for points in series {
        for &(_, y) in *points {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !y_min.is_finite() {
        return (0.0, 1.0);
    }
    let y_min = ((y_min.min(0.0) * 10.0).floor() / 10.0).min(0.0);
    let y_max = ((y_max * 10.0).ceil() / 10.0).max(y_min + 0.1);
    (y_min, y_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sample_curve(n: u64) -> LossCurve {
        let mut curve = LossCurve::new();
        for i in 0..n {
            curve.push(i, 1.0 / (i as f64 + 1.0));
        }
        curve
    }

    #[test]
    fn test_render_raw_curve() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let curve = sample_curve(30);
        let config = PlotConfig {
            smoothing_window: 1,
            show_variance: true,
        };
        terminal
            .draw(|f| render_loss_chart(f, &curve, &config, "Loss", f.area()))
            .unwrap();
    }

    #[test]
    fn test_render_smoothed_curve_with_band() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let curve = sample_curve(50);
        let config = PlotConfig {
            smoothing_window: 10,
            show_variance: true,
        };
        terminal
            .draw(|f| render_loss_chart(f, &curve, &config, "Loss", f.area()))
            .unwrap();
    }

    #[test]
    fn test_render_empty_curve_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let curve = LossCurve::new();
        let config = PlotConfig::default();
        terminal
            .draw(|f| render_loss_chart(f, &curve, &config, "Loss", f.area()))
            .unwrap();
    }

    #[test]
    fn test_x_bounds_empty_defaults() {
        assert_eq!(x_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_y_bounds_rounds_up() {
        let points: &[(f64, f64)] = &[(0.0, 0.42), (1.0, 0.13)];
        let (y_min, y_max) = y_bounds(&[points]);
        assert_eq!(y_min, 0.0);
        assert!((y_max - 0.5).abs() < 1e-9);
    }
}
