use core::fmt::Debug;
use std::{fs, path::Path};

use eyre::{Context, Result};

/// Fixed figure geometry shared by every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Figure size in inches (width, height)
    pub figure_inches: (f64, f64),
    pub dpi: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            figure_inches: (8.0, 5.0),
            dpi: 150,
        }
    }
}

impl ChartStyle {
    /// Canvas size in pixels
    pub fn pixels(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.figure_inches.0 * dpi).round() as u32,
            (self.figure_inches.1 * dpi).round() as u32,
        )
    }

    /// Converts a typographic point size to pixels at this resolution.
    pub fn points(&self, pt: f64) -> u32 {
        (pt * self.dpi as f64 / 72.0).round().max(1.0) as u32
    }
}

pub trait Plot: Debug {
    /// Title drawn above the chart
    fn title(&self) -> &str;
    /// Renders the chart into a PNG at `filepath`
    ///
    /// Arguments:
    /// * `filepath` - The image to write, ie. static/diagram/speedup_view1.png
    /// * `style` - Figure geometry
    fn plot(&self, filepath: &Path, style: &ChartStyle) -> Result<()>;
}

pub fn ensure_plot_dirs(dirs: &[&Path]) -> Result<()> {
    for dir in dirs {
        fs::create_dir_all(dir).wrap_err_with(|| format!("Create plot dir {}", dir.display()))?;
    }
    Ok(())
}
