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

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use simplelog2file::constants::DEFAULT_CONFIG_FILE;
use simplelog2file::{Caller, ConfigFile, FileLogger, LogLevel, caller, format};

use crate::cli::Cli;

fn write_line(logger: &FileLogger, cli: &Cli, caller: &Caller) {
    let message = cli
        .message
        .as_deref()
        .map(|template| format(template, &cli.replacements));

    match (cli.entry, cli.exit, message) {
        (true, _, Some(value)) => logger.trace_entry_with(caller, value),
        (true, _, None) => logger.trace_entry(caller),
        (_, true, Some(value)) => {
            logger.trace_exit_with(caller, value);
        }
        (_, true, None) => logger.trace_exit(caller),
        (false, false, Some(value)) => match cli.level {
            LogLevel::Sql => logger.sql(caller, value),
            level => logger.log(level, caller, &value),
        },
        // clap requires MESSAGE unless --entry or --exit is given
        (false, false, None) => {}
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config from specified path or default log2file.toml
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = ConfigFile::load(&config_path)?;

    config.merge_with_cli(cli.dir.clone(), cli.file_name.clone());

    let failed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&failed);
    let logger = FileLogger::from_config(config.into_logger_config())
        .on_error(move |_| flag.store(true, Ordering::SeqCst));

    let caller = cli.caller.clone().unwrap_or_else(|| caller!());
    write_line(&logger, &cli, &caller);

    if failed.load(Ordering::SeqCst) {
        bail!("Log line was not written to {}", logger.file_path().display());
    }

    Ok(())
}
