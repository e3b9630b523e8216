// Copyright 2025 dentsusoken
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

use clap::{Parser, Subcommand};
use jdkscout::commands::list::ListCommand;
use jdkscout::commands::paths::PathsCommand;
use jdkscout::config::new_scout_config;
use jdkscout::error::{JdkScoutError, Result, format_error_with_color, get_exit_code};
use jdkscout::logging;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "jdkscout")]
#[command(author, version, about = "Discover installed JDKs", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List discovered JDKs
    #[command(visible_alias = "ls")]
    List {
        /// Lowest version to include (inclusive, e.g. "11")
        #[arg(long, value_name = "VERSION")]
        min: Option<String>,

        /// Highest version to include (inclusive, e.g. "17")
        #[arg(long, value_name = "VERSION")]
        max: Option<String>,

        /// Only versions matching this prefix (e.g. "21" or "17.0")
        #[arg(long, value_name = "VERSION")]
        pattern: Option<String>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the directories searched for JDKs
    Paths,
}

fn setup_logger(cli: &Cli) {
    logging::setup_logger(cli.verbose);
}

fn exit_with_error(error: &JdkScoutError) -> ! {
    let use_color = std::io::stderr().is_terminal();
    eprintln!("{}", format_error_with_color(error, use_color));
    std::process::exit(get_exit_code(error));
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    setup_logger(&cli);

    let config = match new_scout_config() {
        Ok(config) => config,
        Err(e) => exit_with_error(&e),
    };

    let result: Result<()> = match cli.command {
        Commands::List {
            min,
            max,
            pattern,
            json,
        } => ListCommand::new(&config).and_then(|command| {
            command.execute(min.as_deref(), max.as_deref(), pattern.as_deref(), json)
        }),
        Commands::Paths => PathsCommand::new(&config).and_then(|command| command.execute()),
    };

    if let Err(e) = result {
        exit_with_error(&e);
    }
}
