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

use chrono::{Local, NaiveDateTime};
use std::fmt;

use crate::caller::Caller;
use crate::constants::DATETIME_PATTERN;
use crate::level::LogLevel;

/// One log line before it hits the file.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: NaiveDateTime,
    pub level: LogLevel,
    pub caller: &'a Caller,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Stamp a record with the current local time.
    pub fn now(level: LogLevel, caller: &'a Caller, message: &'a str) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            level,
            caller,
            message,
        }
    }
}

/// `yyyy-MM-dd HH:mm:ss.SSS [LEVEL] [Class.method()] message`
impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] [{}] {}",
            self.timestamp.format(DATETIME_PATTERN),
            self.level.label(),
            self.caller,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn test_line_layout() {
        let caller = Caller::new("Main", "main");
        let record = LogRecord {
            timestamp: at(17, 23, 2, 9),
            level: LogLevel::Trace,
            caller: &caller,
            message: "Proceed with method",
        };
        assert_eq!(
            record.to_string(),
            "2024-01-10 17:23:02.009 [TRACE] [Main.main()] Proceed with method"
        );
    }

    #[test]
    fn test_padded_label_kept() {
        let caller = Caller::new("Main", "main");
        let record = LogRecord {
            timestamp: at(8, 0, 0, 0),
            level: LogLevel::Warn,
            caller: &caller,
            message: "Could not found a match",
        };
        assert_eq!(
            record.to_string(),
            "2024-01-10 08:00:00.000 [WARN ] [Main.main()] Could not found a match"
        );
    }

    #[test]
    fn test_unknown_caller_and_multiline_message() {
        let caller = Caller::unknown();
        let record = LogRecord {
            timestamp: at(23, 59, 59, 999),
            level: LogLevel::Sql,
            caller: &caller,
            message: "Folgender SQL wird ausgefuehrt:\nSELECT 1",
        };
        assert_eq!(
            record.to_string(),
            "2024-01-10 23:59:59.999 [SQL  ] [.()] Folgender SQL wird ausgefuehrt:\nSELECT 1"
        );
    }
}
