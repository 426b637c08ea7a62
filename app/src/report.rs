use std::path::PathBuf;

use common::{
    config::{Settings, VIEW1, VIEW2, View},
    font::install_chart_font,
    plot::{ChartStyle, Plot, ensure_plot_dirs},
    series::{Series, load_csv},
};
use eyre::{Context, Result};
use speedup_plots::{ComparisonPlot, RuntimePlot, SpeedupPlot};
use tracing::{debug, info};

fn job<'a>(filename: String, plot: impl Plot + 'a) -> (String, Box<dyn Plot + 'a>) {
    (filename, Box::new(plot))
}

fn load_view(settings: &Settings, view: &View) -> Result<Series> {
    let series = load_csv(&settings.csv_path(view))?;
    debug!("{}: {} measurements", view.label, series.len());
    Ok(series)
}

/// Loads both views and renders the five charts in their fixed order.
///
/// Returns the filenames written, relative to the plot directory.
pub fn run_report(settings: &Settings) -> Result<Vec<String>> {
    ensure_plot_dirs(&[settings.plot_dir.as_path()])?;

    let view1 = load_view(settings, &VIEW1)?;
    let view2 = load_view(settings, &VIEW2)?;

    install_chart_font(&settings.fonts)?;
    let style = ChartStyle::default();

    let plot_jobs = vec![
        job(
            format!("speedup_{}.png", VIEW1.name),
            SpeedupPlot::new(format!("Speedup vs Threads ({})", VIEW1.label), &view1),
        ),
        job(
            format!("speedup_{}.png", VIEW2.name),
            SpeedupPlot::new(format!("Speedup vs Threads ({})", VIEW2.label), &view2),
        ),
        job(
            format!("time_{}.png", VIEW1.name),
            RuntimePlot::new(format!("Runtime vs Threads ({})", VIEW1.label), &view1),
        ),
        job(
            format!("time_{}.png", VIEW2.name),
            RuntimePlot::new(format!("Runtime vs Threads ({})", VIEW2.label), &view2),
        ),
        job(
            "speedup_comparison.png".to_owned(),
            ComparisonPlot::new(
                format!("Speedup Comparison: {} vs {}", VIEW1.label, VIEW2.label),
                (VIEW1.label, &view1),
                (VIEW2.label, &view2),
            ),
        ),
    ];

    let mut written = Vec::with_capacity(plot_jobs.len());
    for (filename, plot) in plot_jobs {
        let filepath: PathBuf = settings.plot_path(&filename);
        plot.plot(&filepath, &style)
            .wrap_err_with(|| format!("Plot {}", plot.title()))?;
        written.push(filename);
    }
    info!(
        "Rendered {} charts into {}",
        written.len(),
        settings.plot_dir.display()
    );
    Ok(written)
}

pub fn summary(settings: &Settings, written: &[String]) -> String {
    let mut summary = format!("Saved figures to {}:", settings.plot_dir.display());
    for filename in written {
        summary.push_str(&format!("\n - {filename}"));
    }
    summary
}
