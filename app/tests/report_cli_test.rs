use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const CHARTS: [&str; 5] = [
    "speedup_view1.png",
    "speedup_view2.png",
    "time_view1.png",
    "time_view2.png",
    "speedup_comparison.png",
];

const VIEW1_CSV: &str = "t,serial_ms,thread_ms,speedup\n\
    1,452.1,452.3,1.0\n\
    4,452.1,178.2,2.54\n\
    2,452.1,237.9,1.9\n\
    3,452.1,280.4,1.61\n";

const VIEW2_CSV: &str = "t,serial_ms,thread_ms,speedup\n\
    2,289.7,150.3,1.93\n\
    1,289.7,289.9,1.0\n\
    8,289.7,50.2,5.77\n";

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_speedup-report"))
}

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin_path())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("spawn speedup-report")
}

fn write_data(dir: &Path, name: &str, contents: &str) {
    let data_dir = dir.join("static").join("data");
    fs::create_dir_all(&data_dir).expect("create data dir");
    fs::write(data_dir.join(name), contents).expect("write csv");
}

#[test]
fn renders_all_charts_from_default_locations() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "view1.csv", VIEW1_CSV);
    write_data(dir.path(), "view2.csv", VIEW2_CSV);

    let output = run_cli(dir.path(), &[]);
    assert!(
        output.status.success(),
        "report failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let diagram_dir = dir.path().join("static").join("diagram");
    for chart in CHARTS {
        let size = fs::metadata(diagram_dir.join(chart))
            .unwrap_or_else(|_| panic!("missing {chart}"))
            .len();
        assert!(size > 0, "{chart} is empty");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!(
        "Saved figures to ./static/diagram:\n{}\n",
        CHARTS.map(|chart| format!(" - {chart}")).join("\n")
    );
    assert_eq!(stdout, expected);
}

#[test]
fn second_run_overwrites_in_place() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "view1.csv", VIEW1_CSV);
    write_data(dir.path(), "view2.csv", VIEW2_CSV);

    assert!(run_cli(dir.path(), &[]).status.success());
    assert!(run_cli(dir.path(), &[]).status.success());

    let entries = fs::read_dir(dir.path().join("static").join("diagram"))
        .unwrap()
        .count();
    assert_eq!(entries, CHARTS.len());
}

#[test]
fn custom_directories_are_honoured() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("measurements");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("view1.csv"), VIEW1_CSV).unwrap();
    fs::write(data_dir.join("view2.csv"), VIEW2_CSV).unwrap();

    let output = run_cli(
        dir.path(),
        &["--data-dir", "measurements", "--out-dir", "charts"],
    );
    assert!(
        output.status.success(),
        "report failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    for chart in CHARTS {
        assert!(dir.path().join("charts").join(chart).is_file());
    }
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Saved figures to charts:"));
}

#[test]
fn missing_view_fails_after_creating_output_dir() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "view1.csv", VIEW1_CSV);

    let output = run_cli(dir.path(), &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CSV not found"), "stderr: {stderr}");
    assert!(stderr.contains("view2.csv"), "stderr: {stderr}");

    let diagram_dir = dir.path().join("static").join("diagram");
    assert!(diagram_dir.is_dir());
    assert_eq!(fs::read_dir(diagram_dir).unwrap().count(), 0);
}

#[test]
fn missing_columns_are_reported() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "view1.csv", "t,thread_ms\n1,100\n");
    write_data(dir.path(), "view2.csv", VIEW2_CSV);

    let output = run_cli(dir.path(), &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#"is missing columns: ["serial_ms", "speedup"]"#),
        "stderr: {stderr}"
    );
}

#[test]
fn zero_parallel_time_still_renders_every_chart() {
    let dir = TempDir::new().unwrap();
    write_data(
        dir.path(),
        "view1.csv",
        "t,serial_ms,thread_ms,speedup\n1,100,100,1.0\n2,100,0,inf\n4,100,30,3.33\n",
    );
    write_data(dir.path(), "view2.csv", VIEW2_CSV);

    let output = run_cli(dir.path(), &[]);
    assert!(
        output.status.success(),
        "report failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    for chart in CHARTS {
        assert!(dir.path().join("static").join("diagram").join(chart).is_file());
    }
}
