use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";
pub const DEFAULT_FILE_CONTENT: &str = "To jest zapisane z Javy.";

/// Fixed inputs of the tour. `Default` is what the binary runs with; tests
/// point `output_file` somewhere disposable.
#[derive(Debug, Clone, PartialEq)]
pub struct TourSettings {
    pub output_file: PathBuf,
    pub file_content: String,
    pub numbers: Vec<i32>,
    pub out_of_bounds_index: usize,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            file_content: DEFAULT_FILE_CONTENT.to_string(),
            numbers: vec![1, 2, 3, 4, 5],
            out_of_bounds_index: 5,
        }
    }
}

impl TourSettings {
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }
}
