use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./static/data";
pub const DEFAULT_PLOT_DIR: &str = "./static/diagram";

/// One measured dataset, read from `<name>.csv` and labelled `label` in charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub name: &'static str,
    pub label: &'static str,
}

pub const VIEW1: View = View {
    name: "view1",
    label: "VIEW 1",
};
pub const VIEW2: View = View {
    name: "view2",
    label: "VIEW 2",
};

impl View {
    pub fn csv_file(&self) -> String {
        format!("{}.csv", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub plot_dir: PathBuf,
    /// Font files tried, in order, before the system locations
    pub fonts: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            plot_dir: PathBuf::from(DEFAULT_PLOT_DIR),
            fonts: Vec::new(),
        }
    }
}

impl Settings {
    pub fn csv_path(&self, view: &View) -> PathBuf {
        self.data_dir.join(view.csv_file())
    }

    pub fn plot_path(&self, filename: &str) -> PathBuf {
        self.plot_dir.join(filename)
    }
}
