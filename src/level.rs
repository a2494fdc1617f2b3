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

use std::fmt;

use crate::constants::{DEBUG_LABEL, ERROR_LABEL, INFO_LABEL, SQL_LABEL, TRACE_LABEL, WARN_LABEL};

/// Severity or category of a log line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Error,
    Warn,
    Sql,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Sql,
    ];

    /// Fixed-width label written between the square brackets.
    ///
    /// Every label is five characters wide; shorter names are padded with
    /// trailing spaces so columns line up in a viewer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trace => TRACE_LABEL,
            Self::Debug => DEBUG_LABEL,
            Self::Info => INFO_LABEL,
            Self::Error => ERROR_LABEL,
            Self::Warn => WARN_LABEL,
            Self::Sql => SQL_LABEL,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "sql" => Ok(Self::Sql),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_five_wide() {
        for level in LogLevel::ALL {
            assert_eq!(level.label().chars().count(), 5, "{:?}", level);
        }
    }

    #[test]
    fn test_padded_labels() {
        assert_eq!(LogLevel::Info.label(), "INFO ");
        assert_eq!(LogLevel::Warn.label(), "WARN ");
        assert_eq!(LogLevel::Sql.label(), "SQL  ");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!(" sql ".parse::<LogLevel>(), Ok(LogLevel::Sql));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("fatal".parse::<LogLevel>().is_err());
    }
}
