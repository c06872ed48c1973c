//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::CourseLayout;
use crate::motion::MotionTuning;

pub const TUNING_FILE: &str = "motion_tuning.ron";
pub const LAYOUT_FILE: &str = "course_layout.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from a string.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

/// Whatever `load_motion_content` managed to read. A missing half falls back
/// independently of the other.
#[derive(Debug, Default)]
pub struct MotionContent {
    pub tuning: Option<MotionTuning>,
    pub layout: Option<CourseLayout>,
    pub errors: Vec<ContentLoadError>,
}

/// Load tuning and course layout from `base_path`.
/// Tuning comes back sanitized; both files are attempted so every error is reported.
pub fn load_motion_content(base_path: &Path) -> MotionContent {
    let mut content = MotionContent::default();

    match load_single_file::<MotionTuning>(&base_path.join(TUNING_FILE)) {
        Ok(tuning) => content.tuning = Some(tuning.sanitized()),
        Err(e) => content.errors.push(e),
    }

    match load_single_file::<CourseLayout>(&base_path.join(LAYOUT_FILE)) {
        Ok(layout) => content.layout = Some(layout),
        Err(e) => content.errors.push(e),
    }

    content
}
