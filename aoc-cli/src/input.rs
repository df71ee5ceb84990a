//! Puzzle inputs stored as plain files

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads puzzle inputs from a directory
///
/// Directory structure: `{input_dir}/day{day}.txt`
pub struct InputLoader {
    input_dir: PathBuf,
}

impl InputLoader {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    pub fn dir(&self) -> &Path {
        &self.input_dir
    }

    /// Get the input path for a specific day
    pub fn path(&self, day: u8) -> PathBuf {
        self.input_dir.join(format!("day{day}.txt"))
    }

    /// Check if the input file exists
    pub fn contains(&self, day: u8) -> bool {
        self.path(day).is_file()
    }

    /// Read the whole input for `day`
    pub fn load(&self, day: u8) -> Result<String, InputError> {
        let path = self.path(day);
        match fs::read_to_string(&path) {
            Ok(input) => {
                debug!(day, path = %path.display(), bytes = input.len(), "loaded input");
                Ok(input)
            }
            Err(source) => Err(InputError::Read { day, path, source }),
        }
    }
}
