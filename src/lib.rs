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

//! Simple synchronous logger that appends leveled, timestamped lines to a
//! text file.
//!
//! ```text
//! 2024-01-10 17:23:02.009 [INFO ] [Main.main()] User is not an admin
//! ```
//!
//! ```no_run
//! use simplelog2file::{FileLogger, caller};
//!
//! let logger = FileLogger::with_path("logs");
//! let here = caller!();
//! logger.info(&here, "User is not an admin");
//! logger.debug_fmt(&here, "Set name to '{}'", &["peter"]);
//! ```
//!
//! Known limitation: `{}` always acts as a placeholder while replacements
//! remain; there is no way to escape it.

pub mod caller;
pub mod config;
pub mod constants;
pub mod format;
pub mod level;
pub mod logger;
mod macros;
pub mod record;

pub use caller::Caller;
pub use config::{ConfigFile, DateFileName, FileNameStrategy, FixedFileName, LoggerConfig};
pub use format::{OrNull, format};
pub use level::LogLevel;
pub use logger::FileLogger;
pub use record::LogRecord;
