use std::path::Path;

use common::{
    plot::{ChartStyle, Plot},
    series::{Series, union_t_range},
};
use eyre::Result;

use crate::draw::{Figure, Line, render};

mod draw;

pub const IDEAL_LABEL: &str = "Ideal linear (y = x)";

fn speedup_points(series: &Series) -> Vec<(f64, f64)> {
    series
        .rows()
        .iter()
        .map(|row| (row.t as f64, row.speedup))
        .collect()
}

fn ideal_between(min: u32, max: u32) -> [(f64, f64); 2] {
    [(min as f64, min as f64), (max as f64, max as f64)]
}

/// Measured speedup of one view against perfect scaling.
#[derive(Debug, Clone)]
pub struct SpeedupPlot<'a> {
    title: String,
    series: &'a Series,
}

impl<'a> SpeedupPlot<'a> {
    pub fn new(title: impl Into<String>, series: &'a Series) -> Self {
        Self {
            title: title.into(),
            series,
        }
    }

    /// `y = x` at every measured thread count
    pub fn ideal_line(&self) -> Vec<(f64, f64)> {
        self.series
            .thread_counts()
            .map(|t| (t as f64, t as f64))
            .collect()
    }
}

impl Plot for SpeedupPlot<'_> {
    fn title(&self) -> &str {
        &self.title
    }

    fn plot(&self, filepath: &Path, style: &ChartStyle) -> Result<()> {
        let figure = Figure {
            title: &self.title,
            y_desc: "Speedup",
            lines: vec![
                Line::measured("Measured speedup", speedup_points(self.series)),
                Line::dashed(IDEAL_LABEL, self.ideal_line()),
            ],
        };
        render(filepath, &figure, style)
    }
}

/// Parallel runtime of one view against its serial baseline.
#[derive(Debug, Clone)]
pub struct RuntimePlot<'a> {
    title: String,
    series: &'a Series,
}

impl<'a> RuntimePlot<'a> {
    pub fn new(title: impl Into<String>, series: &'a Series) -> Self {
        Self {
            title: title.into(),
            series,
        }
    }

    /// Horizontal segment at the first row's serial time across the measured thread
    /// counts.
    pub fn baseline(&self) -> Option<[(f64, f64); 2]> {
        let (min, max) = self.series.t_range()?;
        let serial_ms = self.series.baseline_ms()?;
        Some([(min as f64, serial_ms), (max as f64, serial_ms)])
    }
}

impl Plot for RuntimePlot<'_> {
    fn title(&self) -> &str {
        &self.title
    }

    fn plot(&self, filepath: &Path, style: &ChartStyle) -> Result<()> {
        let parallel = self
            .series
            .rows()
            .iter()
            .map(|row| (row.t as f64, row.thread_ms))
            .collect();
        let baseline = self.baseline().map(Vec::from).unwrap_or_default();
        let figure = Figure {
            title: &self.title,
            y_desc: "Time (ms)",
            lines: vec![
                Line::measured("Parallel (mandelbrot thread)", parallel),
                Line::dashed("Serial baseline", baseline),
            ],
        };
        render(filepath, &figure, style)
    }
}

/// Speedup of two views overlaid on one chart.
#[derive(Debug, Clone)]
pub struct ComparisonPlot<'a> {
    title: String,
    views: [(&'a str, &'a Series); 2],
}

impl<'a> ComparisonPlot<'a> {
    pub fn new(
        title: impl Into<String>,
        first: (&'a str, &'a Series),
        second: (&'a str, &'a Series),
    ) -> Self {
        Self {
            title: title.into(),
            views: [first, second],
        }
    }

    /// `y = x` across the thread counts of both views
    pub fn ideal_line(&self) -> Option<[(f64, f64); 2]> {
        let [(_, first), (_, second)] = self.views;
        let (min, max) = union_t_range(first, second)?;
        Some(ideal_between(min, max))
    }
}

impl Plot for ComparisonPlot<'_> {
    fn title(&self) -> &str {
        &self.title
    }

    fn plot(&self, filepath: &Path, style: &ChartStyle) -> Result<()> {
        let mut lines = self
            .views
            .iter()
            .map(|(label, series)| Line::measured(*label, speedup_points(series)))
            .collect::<Vec<_>>();
        lines.push(Line::dashed(
            IDEAL_LABEL,
            self.ideal_line().map(Vec::from).unwrap_or_default(),
        ));
        let figure = Figure {
            title: &self.title,
            y_desc: "Speedup",
            lines,
        };
        render(filepath, &figure, style)
    }
}
