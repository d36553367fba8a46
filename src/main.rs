use anyhow::Result;
use clap::{Parser, Subcommand};

use semverkit::cli::{self, SortArgs, VersionBump};
use semverkit::config::{self, SortOrder};
use semverkit::ui;

#[derive(clap::Parser)]
#[command(
    name = "semverkit",
    version,
    about = "Parse, validate, compare, sort and bump semantic versions"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        help = "Accept a leading 'v', surrounding whitespace, leading zeros and short versions"
    )]
    tolerant: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form of each version
    Parse {
        #[arg(required = true)]
        versions: Vec<String>,

        #[arg(long, help = "Also print each field")]
        explain: bool,
    },

    /// Check that every version is well formed
    Validate {
        #[arg(required = true)]
        versions: Vec<String>,
    },

    /// Print -1, 0 or 1 for the precedence of A against B
    Compare { a: String, b: String },

    /// Sort versions by precedence
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,

        #[arg(long, overrides_with = "descending", help = "Lowest precedence first")]
        ascending: bool,

        #[arg(long, overrides_with = "ascending", help = "Highest precedence first")]
        descending: bool,

        #[arg(long, help = "Drop versions equal in precedence to the previous one")]
        dedup: bool,

        #[arg(long, help = "Skip inputs that are not valid versions")]
        skip_invalid: bool,
    },

    /// Increment one core field and clear pre-release and build metadata
    Bump {
        #[arg(value_enum)]
        part: VersionBump,
        version: String,
    },

    /// Strip pre-release and build metadata (always strict)
    Finalize { version: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let tolerant = args.tolerant || config.parse.tolerant;

    let lines = match args.command {
        Command::Parse { versions, explain } => cli::run_parse(&versions, tolerant, explain),
        Command::Validate { versions } => {
            let outcomes = cli::run_validate(&versions, tolerant);
            let mut invalid = 0;
            for outcome in &outcomes {
                match &outcome.error {
                    None => ui::display_success(&outcome.input),
                    Some(e) => {
                        ui::display_error(&format!("{}: {}", outcome.input, e));
                        invalid += 1;
                    }
                }
            }
            if invalid > 0 {
                std::process::exit(1);
            }
            return Ok(());
        }
        Command::Compare { a, b } => cli::run_compare(&a, &b, tolerant).map(|line| vec![line]),
        Command::Sort {
            versions,
            ascending,
            descending,
            dedup,
            skip_invalid,
        } => {
            let order = if descending {
                SortOrder::Descending
            } else if ascending {
                SortOrder::Ascending
            } else {
                config.output.order
            };
            let sort_args = SortArgs {
                versions,
                order,
                dedup: dedup || config.output.dedup,
                skip_invalid: skip_invalid || config.output.skip_invalid,
                tolerant,
            };
            cli::run_sort(&sort_args).map(|outcome| {
                for skipped in &outcome.skipped {
                    ui::display_status(&format!(
                        "skipped '{}': {}",
                        skipped.input, skipped.error
                    ));
                }
                outcome.lines
            })
        }
        Command::Bump { part, version } => {
            cli::run_bump(&version, part, tolerant).map(|line| vec![line])
        }
        Command::Finalize { version } => cli::run_finalize(&version).map(|line| vec![line]),
    };

    match lines {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
