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

use clap::Parser;
use std::path::PathBuf;

use simplelog2file::{Caller, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "log2file")]
#[command(about = "Append a leveled, timestamped line to a log file")]
#[command(version)]
pub struct Cli {
    /// Path to config file (defaults to log2file.toml in current directory if it exists)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory of the log file (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<String>,

    /// Log file name (defaults to YYYY-MM-DD.log)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Level of the line: trace, debug, info, warn, error or sql
    /// (markers written by --entry and --exit are always TRACE)
    #[arg(long, default_value = "info", conflicts_with_all = ["entry", "exit"])]
    pub level: LogLevel,

    /// Caller shown in the line, as Class.method
    #[arg(long)]
    pub caller: Option<Caller>,

    /// Write a TRACE "Entry" marker; MESSAGE becomes its optional value
    #[arg(long, conflicts_with = "exit")]
    pub entry: bool,

    /// Write a TRACE "Exit" marker; MESSAGE becomes its optional value
    #[arg(long)]
    pub exit: bool,

    /// Message or template with {} placeholders
    #[arg(required_unless_present_any = ["entry", "exit"])]
    pub message: Option<String>,

    /// Values substituted into the {} placeholders, in order
    pub replacements: Vec<String>,
}
