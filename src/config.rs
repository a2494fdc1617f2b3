// Copyright (c) 2025 Sean McNamara <smcnam@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{FILENAME_DATE_PATTERN, FILENAME_EXTENSION};

/// Decides the log file name. Resolved exactly once, when a
/// [`LoggerConfig`] is built.
pub trait FileNameStrategy {
    fn file_name(&self) -> String;
}

/// `YYYY-MM-DD.log` for the current local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFileName;

impl DateFileName {
    pub fn for_date(date: NaiveDate) -> String {
        format!("{}{}", date.format(FILENAME_DATE_PATTERN), FILENAME_EXTENSION)
    }
}

impl FileNameStrategy for DateFileName {
    fn file_name(&self) -> String {
        Self::for_date(Local::now().date_naive())
    }
}

/// A caller-chosen file name, used as is.
#[derive(Debug, Clone)]
pub struct FixedFileName(pub String);

impl FileNameStrategy for FixedFileName {
    fn file_name(&self) -> String {
        self.0.clone()
    }
}

/// Where a logger writes. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    directory: PathBuf,
    file_name: String,
}

impl LoggerConfig {
    /// Working directory, file named after today's date.
    pub fn new() -> Self {
        Self::with_directory("")
    }

    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self::with_strategy(directory, &DateFileName)
    }

    pub fn with_file_name(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    pub fn with_strategy(directory: impl Into<PathBuf>, strategy: &dyn FileNameStrategy) -> Self {
        Self::with_file_name(directory, strategy.file_name())
    }

    /// Empty means the process working directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration file structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Directory the log file is placed in (defaults to the working directory)
    pub directory: Option<String>,

    /// Log file name (defaults to YYYY-MM-DD.log)
    pub file_name: Option<String>,
}

impl ConfigFile {
    /// Load config from a file, or return default if file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Merge CLI args into this config, where CLI args take precedence
    pub fn merge_with_cli(&mut self, directory: Option<String>, file_name: Option<String>) {
        if directory.is_some() {
            self.directory = directory;
        }
        if file_name.is_some() {
            self.file_name = file_name;
        }
    }

    /// Resolve into a [`LoggerConfig`]; the date-based name is computed here.
    pub fn into_logger_config(self) -> LoggerConfig {
        let directory = self.directory.unwrap_or_default();
        match self.file_name {
            Some(name) => LoggerConfig::with_file_name(directory, name),
            None => LoggerConfig::with_directory(directory),
        }
    }
}
