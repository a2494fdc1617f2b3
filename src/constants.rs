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

pub const TRACE_LABEL: &str = "TRACE";
pub const DEBUG_LABEL: &str = "DEBUG";
pub const INFO_LABEL: &str = "INFO ";
pub const ERROR_LABEL: &str = "ERROR";
pub const WARN_LABEL: &str = "WARN ";
pub const SQL_LABEL: &str = "SQL  ";

/// chrono pattern for the date part of the default file name
pub const FILENAME_DATE_PATTERN: &str = "%Y-%m-%d";
/// chrono pattern for the timestamp column, millisecond precision
pub const DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";
pub const FILENAME_EXTENSION: &str = ".log";

pub const METHOD_BRACKETS: &str = "()";
pub const METHOD_DELIMITER: &str = ".";

pub const NULL: &str = "null";

pub const ENTRY: &str = "Entry";
pub const ENTRY_VALUE: &str = "Entry -> ";
pub const EXIT: &str = "Exit";
pub const EXIT_VALUE: &str = "Exit -> ";

pub const SQL_BANNER: &str = "Folgender SQL wird ausgefuehrt:\n";

pub const PLACEHOLDER: &str = "{}";

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Config file picked up by `log2file` when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "log2file.toml";
