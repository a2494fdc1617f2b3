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

//! Leveled logger appending one line per call to a plain text file.
//!
//! Every call opens the file, appends, and closes it again; nothing is held
//! open or buffered between calls. Write failures never reach the caller:
//! they are printed to stderr and handed to the optional observer set with
//! [`FileLogger::on_error`].
//!
//! The file name is fixed when the logger is built. A logger created before
//! midnight keeps writing to the previous day's file.

use anyhow::{Context, Result};
use std::fmt::{self, Display};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::caller::Caller;
use crate::config::LoggerConfig;
use crate::constants::{ENTRY, ENTRY_VALUE, EXIT, EXIT_VALUE, LINE_SEPARATOR, SQL_BANNER};
use crate::format::{OrNull, format};
use crate::level::LogLevel;
use crate::record::LogRecord;

type ErrorObserver = Arc<dyn Fn(&anyhow::Error) + Send + Sync>;

#[derive(Clone)]
pub struct FileLogger {
    config: LoggerConfig,
    observer: Option<ErrorObserver>,
}

impl FileLogger {
    /// Log to `YYYY-MM-DD.log` in the working directory.
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::new())
    }

    /// Log to `YYYY-MM-DD.log` in `directory`.
    pub fn with_path(directory: impl Into<PathBuf>) -> Self {
        Self::from_config(LoggerConfig::with_directory(directory))
    }

    pub fn with_path_and_file_name(
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self::from_config(LoggerConfig::with_file_name(directory, file_name))
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Register a callback that sees every write failure.
    pub fn on_error<F>(mut self, observer: F) -> Self
    where
        F: Fn(&anyhow::Error) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn file_path(&self) -> PathBuf {
        self.config.file_path()
    }

    pub fn trace(&self, caller: &Caller, message: impl Display) {
        self.log(LogLevel::Trace, caller, &message.to_string());
    }

    pub fn trace_fmt<S: AsRef<str>>(&self, caller: &Caller, template: &str, replacements: &[S]) {
        self.log(LogLevel::Trace, caller, &format(template, replacements));
    }

    /// Writes `Entry`.
    pub fn trace_entry(&self, caller: &Caller) {
        self.log(LogLevel::Trace, caller, ENTRY);
    }

    /// Writes `Entry -> value`.
    pub fn trace_entry_with(&self, caller: &Caller, value: impl Display) {
        self.log(LogLevel::Trace, caller, &format!("{}{}", ENTRY_VALUE, value));
    }

    pub fn trace_entry_fmt<S: AsRef<str>>(
        &self,
        caller: &Caller,
        template: &str,
        replacements: &[S],
    ) {
        let message = format!("{}{}", ENTRY_VALUE, format(template, replacements));
        self.log(LogLevel::Trace, caller, &message);
    }

    /// Writes `Exit`.
    pub fn trace_exit(&self, caller: &Caller) {
        self.log(LogLevel::Trace, caller, EXIT);
    }

    /// Writes `Exit -> value` and hands `value` back, so a return
    /// expression can be wrapped without changing it.
    ///
    /// ```no_run
    /// use simplelog2file::{FileLogger, caller};
    ///
    /// fn answer(logger: &FileLogger) -> u32 {
    ///     logger.trace_exit_with(&caller!(), 42)
    /// }
    /// ```
    pub fn trace_exit_with<T: Display>(&self, caller: &Caller, value: T) -> T {
        self.log(LogLevel::Trace, caller, &format!("{}{}", EXIT_VALUE, value));
        value
    }

    /// Like [`trace_exit_with`](Self::trace_exit_with), writing `null` for `None`.
    pub fn trace_exit_option<T: Display>(&self, caller: &Caller, value: Option<T>) -> Option<T> {
        let message = format!("{}{}", EXIT_VALUE, OrNull(value.as_ref()));
        self.log(LogLevel::Trace, caller, &message);
        value
    }

    pub fn debug(&self, caller: &Caller, message: impl Display) {
        self.log(LogLevel::Debug, caller, &message.to_string());
    }

    pub fn debug_fmt<S: AsRef<str>>(&self, caller: &Caller, template: &str, replacements: &[S]) {
        self.log(LogLevel::Debug, caller, &format(template, replacements));
    }

    pub fn info(&self, caller: &Caller, message: impl Display) {
        self.log(LogLevel::Info, caller, &message.to_string());
    }

    pub fn info_fmt<S: AsRef<str>>(&self, caller: &Caller, template: &str, replacements: &[S]) {
        self.log(LogLevel::Info, caller, &format(template, replacements));
    }

    pub fn warn(&self, caller: &Caller, message: impl Display) {
        self.log(LogLevel::Warn, caller, &message.to_string());
    }

    pub fn warn_fmt<S: AsRef<str>>(&self, caller: &Caller, template: &str, replacements: &[S]) {
        self.log(LogLevel::Warn, caller, &format(template, replacements));
    }

    pub fn error(&self, caller: &Caller, message: impl Display) {
        self.log(LogLevel::Error, caller, &message.to_string());
    }

    pub fn error_fmt<S: AsRef<str>>(&self, caller: &Caller, template: &str, replacements: &[S]) {
        self.log(LogLevel::Error, caller, &format(template, replacements));
    }

    /// Writes the statement below a fixed banner line. Newlines inside the
    /// statement are written as they are.
    pub fn sql(&self, caller: &Caller, statement: impl Display) {
        self.log(LogLevel::Sql, caller, &format!("{}{}", SQL_BANNER, statement));
    }

    /// Append one record at `level`. Never fails from the caller's view.
    pub fn log(&self, level: LogLevel, caller: &Caller, message: &str) {
        let record = LogRecord::now(level, caller, message);
        if let Err(e) = self.write_record(&record) {
            eprintln!("Error: {:#}", e);
            if let Some(observer) = &self.observer {
                observer(&e);
            }
        }
    }

    fn write_record(&self, record: &LogRecord<'_>) -> Result<()> {
        let path = self.file_path();
        ensure_directory(self.config.directory())?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        // Dropping the writer on any path releases the handle.
        let mut writer = BufWriter::new(file);
        write!(writer, "{}{}", LINE_SEPARATOR, record)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Failed to write log file: {}", path.display()))?;

        Ok(())
    }
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogger")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

fn ensure_directory(directory: &Path) -> Result<()> {
    if directory.as_os_str().is_empty() || directory.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory: {}", directory.display()))
}
