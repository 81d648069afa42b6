use regex::Regex;
use std::path::PathBuf;

pub const DEFAULT_FIXTURE_INPUT: &str = "v3_series.json";
pub const DEFAULT_FIXTURE_OUTPUT: &str = "v3_series_new.json";

pub const IMAGE_NAME: &str = "ghcr.io/onedr0p/exportarr";

/// Files carrying a pinned image reference, relative to the repository root.
pub const FILES_WITH_IMAGE_REFS: [&str; 5] = [
    "./README.md",
    "./examples/compose/docker-compose.yaml",
    "./examples/kubernetes/lidarr-exporter.yaml",
    "./examples/kubernetes/radarr-exporter.yaml",
    "./examples/kubernetes/sonarr-exporter.yaml",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRefConfig {
    pub image: String,
    pub files: Vec<PathBuf>,
}

impl Default for ImageRefConfig {
    fn default() -> Self {
        Self {
            image: IMAGE_NAME.to_string(),
            files: FILES_WITH_IMAGE_REFS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl ImageRefConfig {
    /// Matches `<image>:v` followed by a run of digits and dots.
    pub fn pattern(&self) -> Result<Regex, regex::Error> {
        Regex::new(&format!(r"{}:v[0-9.]+", regex::escape(&self.image)))
    }

    #[must_use]
    pub fn image_ref(&self, tag: &str) -> String {
        format!("{}:{tag}", self.image)
    }
}
