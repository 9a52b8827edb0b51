//! The option list a dropdown filters.
//!
//! Callers convert whatever container they hold into an `OptionList` once;
//! the widget only ever sees this type.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered, immutable list of option labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList {
    items: Vec<String>,
}

impl OptionList {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    /// Find the first option equal to `text` ignoring case.
    pub fn find_ignore_case(&self, text: &str) -> Option<(usize, &str)> {
        let needle = text.to_lowercase();
        self.iter()
            .enumerate()
            .find(|(_, option)| option.to_lowercase() == needle)
    }

    /// Parse options from either a JSON array of strings or one option per line.
    pub fn parse(contents: &str) -> serde_json::Result<Self> {
        if contents.trim_start().starts_with('[') {
            return serde_json::from_str(contents);
        }
        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect())
    }

    /// Load options from a file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<S: Into<String>> From<Vec<S>> for OptionList {
    fn from(items: Vec<S>) -> Self {
        items.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for OptionList {
    fn from(items: &[S]) -> Self {
        items.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for OptionList {
    fn from(items: [S; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for OptionList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
