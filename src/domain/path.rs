//! File system path value objects.
//!
//! These only validate and resolve paths; they never touch the file system.

use super::errors::ValidationError;
use super::value_object::{SingleValue, ValueObject};
use crate::validation::{Required, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

fn required_path(field: &'static str, path: String) -> Result<PathBuf, ValidationError> {
    Required.check(field, &path)?;
    Ok(PathBuf::from(path))
}

/// Path to a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilePath(PathBuf);

impl FilePath {
    /// # Errors
    ///
    /// `ValidationError::MissingValue` if the path is blank.
    pub fn new(path: impl Into<String>) -> Result<Self, ValidationError> {
        required_path("file path", path.into()).map(Self)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve against the current working directory. The file need not
    /// exist.
    pub fn full_path(&self) -> io::Result<PathBuf> {
        std::path::absolute(&self.0)
    }
}

impl ValueObject for FilePath {}

impl SingleValue for FilePath {
    type Value = Path;

    fn value(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<String> for FilePath {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FilePath> for String {
    fn from(path: FilePath) -> Self {
        path.0.to_string_lossy().into_owned()
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Path to a directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DirectoryPath(PathBuf);

impl DirectoryPath {
    /// # Errors
    ///
    /// `ValidationError::MissingValue` if the path is blank.
    pub fn new(path: impl Into<String>) -> Result<Self, ValidationError> {
        required_path("directory path", path.into()).map(Self)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn full_path(&self) -> io::Result<PathBuf> {
        std::path::absolute(&self.0)
    }

    /// File `file_name` inside this directory.
    pub fn join(&self, file_name: impl Into<String>) -> Result<DirectoryAndFilePath, ValidationError> {
        DirectoryAndFilePath::from_parts(self.clone(), file_name)
    }
}

impl ValueObject for DirectoryPath {}

impl SingleValue for DirectoryPath {
    type Value = Path;

    fn value(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<String> for DirectoryPath {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DirectoryPath> for String {
    fn from(path: DirectoryPath) -> Self {
        path.0.to_string_lossy().into_owned()
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A directory and a file name inside it, kept separately and joined.
///
/// # Example
///
/// ```
/// use jp_value_objects::domain::DirectoryAndFilePath;
/// use std::path::Path;
///
/// let path = DirectoryAndFilePath::new("exports", "customers.csv").unwrap();
/// assert_eq!(path.file_name(), "customers.csv");
/// assert_eq!(path.as_path(), Path::new("exports").join("customers.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryAndFilePath {
    directory: DirectoryPath,
    file_name: String,
    combined: PathBuf,
}

impl DirectoryAndFilePath {
    /// # Errors
    ///
    /// `ValidationError::MissingValue` if either part is blank.
    pub fn new(
        directory: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::from_parts(DirectoryPath::new(directory)?, file_name)
    }

    fn from_parts(
        directory: DirectoryPath,
        file_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        Required.check("file name", &file_name)?;
        let combined = directory.as_path().join(&file_name);

        Ok(Self {
            directory,
            file_name,
            combined,
        })
    }

    pub fn directory(&self) -> &DirectoryPath {
        &self.directory
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn as_path(&self) -> &Path {
        &self.combined
    }

    pub fn full_path(&self) -> io::Result<PathBuf> {
        std::path::absolute(&self.combined)
    }

    /// The combined path as a [`FilePath`].
    pub fn to_file_path(&self) -> FilePath {
        FilePath(self.combined.clone())
    }
}

impl ValueObject for DirectoryAndFilePath {}

impl SingleValue for DirectoryAndFilePath {
    type Value = Path;

    fn value(&self) -> &Path {
        &self.combined
    }
}

impl fmt::Display for DirectoryAndFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.combined.display())
    }
}
