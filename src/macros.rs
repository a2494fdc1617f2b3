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

//! Call-site macros that fill in the caller automatically.
//!
//! With one message argument they forward to the plain leveled method. With a
//! template and further arguments, each argument is turned into a string via
//! `Display` and substituted into the `{}` placeholders.
//!
//! ```no_run
//! use simplelog2file::{FileLogger, info, trace_exit};
//!
//! fn load(logger: &FileLogger, id: u32) -> usize {
//!     info!(logger, "loading id={} attempt={}", id, 1);
//!     trace_exit!(logger, 3)
//! }
//! ```

#[macro_export]
macro_rules! trace {
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $logger.trace_fmt(
            &$crate::caller!(),
            $template,
            &[$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
    ($logger:expr, $message:expr $(,)?) => {
        $logger.trace(&$crate::caller!(), $message)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug_fmt(
            &$crate::caller!(),
            $template,
            &[$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
    ($logger:expr, $message:expr $(,)?) => {
        $logger.debug(&$crate::caller!(), $message)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $logger.info_fmt(
            &$crate::caller!(),
            $template,
            &[$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
    ($logger:expr, $message:expr $(,)?) => {
        $logger.info(&$crate::caller!(), $message)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn_fmt(
            &$crate::caller!(),
            $template,
            &[$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
    ($logger:expr, $message:expr $(,)?) => {
        $logger.warn(&$crate::caller!(), $message)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $logger.error_fmt(
            &$crate::caller!(),
            $template,
            &[$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
    ($logger:expr, $message:expr $(,)?) => {
        $logger.error(&$crate::caller!(), $message)
    };
}

#[macro_export]
macro_rules! sql {
    ($logger:expr, $statement:expr $(,)?) => {
        $logger.sql(&$crate::caller!(), $statement)
    };
}

#[macro_export]
macro_rules! trace_entry {
    ($logger:expr $(,)?) => {
        $logger.trace_entry(&$crate::caller!())
    };
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $logger.trace_entry_fmt(
            &$crate::caller!(),
            $template,
            &[$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
    ($logger:expr, $value:expr $(,)?) => {
        $logger.trace_entry_with(&$crate::caller!(), $value)
    };
}

/// With a value, evaluates to that value after logging it.
#[macro_export]
macro_rules! trace_exit {
    ($logger:expr $(,)?) => {
        $logger.trace_exit(&$crate::caller!())
    };
    ($logger:expr, $value:expr $(,)?) => {
        $logger.trace_exit_with(&$crate::caller!(), $value)
    };
}

#[cfg(test)]
mod tests {
    use crate::FileLogger;
    use std::fs;
    use tempfile::TempDir;

    struct Worker {
        logger: FileLogger,
    }

    impl Worker {
        fn run(&self, job: &str) -> u8 {
            crate::trace_entry!(self.logger, "job={}", job);
            crate::info!(self.logger, "running {} of {}", 1, 2);
            crate::warn!(self.logger, "plain");
            crate::sql!(self.logger, "SELECT 1");
            crate::trace_exit!(self.logger, 5u8)
        }
    }

    #[test]
    fn test_macros_capture_method() {
        let dir = TempDir::new().unwrap();
        let worker = Worker {
            logger: FileLogger::with_path_and_file_name(dir.path(), "macros.log"),
        };

        assert_eq!(worker.run("import"), 5);

        let content = fs::read_to_string(dir.path().join("macros.log")).unwrap();
        assert!(content.contains("[TRACE] [Worker.run()] Entry -> job=import"));
        assert!(content.contains("[INFO ] [Worker.run()] running 1 of 2"));
        assert!(content.contains("[WARN ] [Worker.run()] plain"));
        assert!(content.contains("[SQL  ] [Worker.run()] Folgender SQL wird ausgefuehrt:\nSELECT 1"));
        assert!(content.contains("[TRACE] [Worker.run()] Exit -> 5"));
    }

    #[test]
    fn test_macros_in_free_function() {
        let dir = TempDir::new().unwrap();
        let logger = FileLogger::with_path_and_file_name(dir.path(), "free.log");

        crate::trace_entry!(logger);
        crate::debug!(logger, "value {}", "x");
        crate::error!(logger, "boom");
        crate::trace!(logger, String::from("owned"));
        crate::trace_exit!(logger);

        let content = fs::read_to_string(dir.path().join("free.log")).unwrap();
        let lines: Vec<&str> = content.lines().skip(1).collect();
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert!(line.contains("[tests.test_macros_in_free_function()]"), "{}", line);
        }
        assert!(lines[0].ends_with("Entry"));
        assert!(lines[1].ends_with("value x"));
        assert!(lines[4].ends_with("Exit"));
    }
}
