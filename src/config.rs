use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data: DataConfig,
    pub render: RenderConfig,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let text = fs::read_to_string(file_name).wrap_err("cannot load configuration file")?;
        toml::from_str(&text).wrap_err("cannot parse configuration file")
    }
}

/// Where the three data sources live. File names are resolved relative to
/// `dir`.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub students: String,
    pub assignments: String,
    pub submissions: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            dir: PathBuf::from("data"),
            students: "students.txt".to_owned(),
            assignments: "assignments.txt".to_owned(),
            submissions: "submissions".to_owned(),
        }
    }
}

impl DataConfig {
    pub fn students_path(&self) -> PathBuf {
        self.dir.join(&self.students)
    }

    pub fn assignments_path(&self) -> PathBuf {
        self.dir.join(&self.assignments)
    }

    pub fn submissions_dir(&self) -> PathBuf {
        self.dir.join(&self.submissions)
    }
}

/// How a rendered histogram leaves the process: written to a PNG, or written
/// and handed to the platform image viewer.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Save,
    Window,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            mode: RenderMode::Save,
            width: 640,
            height: 480,
        }
    }
}

impl RenderConfig {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
