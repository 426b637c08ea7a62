use std::{ops::Range, path::Path};

use common::{font::CHART_FONT_FAMILY, plot::ChartStyle};
use eyre::{Context, ContextCompat, Result};
use plotters::prelude::*;
use tracing::debug;

/// Fraction of the data span left empty on each side of an axis
const AXIS_MARGIN: f64 = 0.05;

const PALETTE: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stroke {
    /// Solid line with a circle on every point
    Measured,
    /// Dashed reference line without markers
    Dashed,
}

#[derive(Debug, Clone)]
pub(crate) struct Line {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub stroke: Stroke,
}

impl Line {
    pub fn measured(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
            stroke: Stroke::Measured,
        }
    }

    pub fn dashed(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
            stroke: Stroke::Dashed,
        }
    }

    /// Points with both coordinates finite. An infinite value would leave the axis
    /// range unbounded, so such points are not drawn.
    fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

#[derive(Debug)]
pub(crate) struct Figure<'a> {
    pub title: &'a str,
    pub y_desc: &'a str,
    pub lines: Vec<Line>,
}

impl Figure<'_> {
    fn bounds(&self) -> Option<(Range<f64>, Range<f64>)> {
        let mut points = self.lines.iter().flat_map(Line::finite_points);
        let (x, y) = points.next()?;
        let (x_min, x_max, y_min, y_max) =
            points.fold((x, x, y, y), |(x_min, x_max, y_min, y_max), (x, y)| {
                (x_min.min(x), x_max.max(x), y_min.min(y), y_max.max(y))
            });
        Some((padded(x_min, x_max), padded(y_min, y_max)))
    }
}

fn padded(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        return (min - 0.5)..(max + 0.5);
    }
    let margin = span * AXIS_MARGIN;
    (min - margin)..(max + margin)
}

/// Draws `figure` into a PNG at `filepath`, replacing any existing file.
pub(crate) fn render(filepath: &Path, figure: &Figure<'_>, style: &ChartStyle) -> Result<()> {
    let (x_range, y_range) = figure
        .bounds()
        .with_context(|| format!("Nothing to plot for {}", figure.title))?;
    draw(filepath, figure, style, x_range, y_range)
        .wrap_err_with(|| format!("Render {}", filepath.display()))?;
    debug!("Wrote {}", filepath.display());
    Ok(())
}

fn draw(
    filepath: &Path,
    figure: &Figure<'_>,
    style: &ChartStyle,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<()> {
    let root = BitMapBackend::new(filepath, style.pixels()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(style.points(10.0))
        .caption(figure.title, (CHART_FONT_FAMILY, style.points(12.0)).into_font())
        .x_label_area_size(style.points(30.0))
        .y_label_area_size(style.points(40.0))
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(WHITE)
        .x_desc("Threads")
        .y_desc(figure.y_desc)
        .label_style((CHART_FONT_FAMILY, style.points(9.0)).into_font())
        .axis_desc_style((CHART_FONT_FAMILY, style.points(10.0)).into_font())
        .draw()?;

    let line_width = style.points(1.5);
    let marker_size = style.points(3.0);
    for (idx, line) in figure.lines.iter().enumerate() {
        let points = line.finite_points().collect::<Vec<_>>();
        if points.is_empty() {
            continue;
        }
        let color = PALETTE[idx % PALETTE.len()];
        let stroke = color.stroke_width(line_width);
        let anno = match line.stroke {
            Stroke::Measured => {
                chart.draw_series(LineSeries::new(points.iter().copied(), stroke))?
            }
            Stroke::Dashed => chart.draw_series(DashedLineSeries::new(
                points.clone(),
                style.points(5.0),
                style.points(3.0),
                stroke,
            ))?,
        };
        anno.label(line.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));

        if line.stroke == Stroke::Measured {
            chart.draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, marker_size, color.filled())),
            )?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font((CHART_FONT_FAMILY, style.points(9.0)).into_font())
        .draw()?;

    root.present()?;
    Ok(())
}
