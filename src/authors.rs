use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AppError;

/// Usernames mapped to full author names, as stored in the authors file
///
/// ```yaml
/// mb: Michael Bluth
/// lb: Lindsay Bluth
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Authors {
    names: HashMap<String, String>,
}

impl Authors {
    /// Loads authors from a YAML file
    ///
    /// # Arguments
    /// * `path` - Path to the authors file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let unreadable = |reason: String| AppError::AuthorsFileUnreadable {
            path: path.to_path_buf(),
            reason,
        };

        let file_contents = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        let authors = Self::parse(&file_contents).map_err(|e| unreadable(e.to_string()))?;
        if authors.is_empty() {
            warn!(path = %path.display(), "authors file has no entries");
        }
        debug!(path = %path.display(), count = authors.len(), "loaded authors");
        Ok(authors)
    }

    /// Parses authors from YAML text. Blank text and a bare document marker are empty.
    pub fn parse(file_contents: &str) -> Result<Self, serde_yaml::Error> {
        if file_contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let authors: Option<Self> = serde_yaml::from_str(file_contents)?;
        Ok(authors.unwrap_or_default())
    }

    /// Looks up the full name for an exact username
    pub fn lookup(&self, username: &str) -> Result<&str, AppError> {
        self.names
            .get(username)
            .map(String::as_str)
            .ok_or_else(|| AppError::UnknownUsername(username.to_string()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Authors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(username, name)| (username.into(), name.into()))
                .collect(),
        }
    }
}
