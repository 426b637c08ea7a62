use std::path::PathBuf;

use clap::Parser;
use common::config::{DEFAULT_DATA_DIR, DEFAULT_PLOT_DIR, Settings};
use eyre::Result;
use tracing::error;
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

mod report;

const LOG_TARGETS: &[&str] = &["speedup_report", "common", "speedup_plots"];

/// Render speedup and runtime charts for the two measured views
#[derive(Parser)]
struct Cli {
    /// Folder holding view1.csv and view2.csv
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Folder the PNG charts are written to
    #[arg(long, default_value = DEFAULT_PLOT_DIR)]
    out_dir: PathBuf,
    /// TrueType font for chart text, used instead of the bundled DejaVu Sans
    #[arg(long)]
    font: Option<PathBuf>,
    #[arg(short, long)]
    log: Vec<String>,
}

fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();

    let mut env_filter = EnvFilter::new("");
    for log in &args.log {
        env_filter = env_filter.add_directive(log.parse()?);
    }
    for target in LOG_TARGETS {
        if !args.log.iter().any(|x| x.starts_with(target)) {
            env_filter = env_filter.add_directive(format!("{target}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_writer(std::io::stderr)
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .init();

    let settings = Settings {
        data_dir: args.data_dir,
        plot_dir: args.out_dir,
        fonts: args.font.into_iter().collect(),
    };

    match report::run_report(&settings) {
        Ok(written) => {
            println!("{}", report::summary(&settings, &written));
            Ok(())
        }
        Err(err) => {
            error!("{err:#?}");
            Err(err)
        }
    }
}
