//! The lodown CLI.
//!
//! Applies the `lodown` collection utilities to JSON documents:
//!
//! - `lodown type-of [INPUT]` - Print the type tag of the document
//! - `lodown entries [INPUT]` - Print `key<TAB>value` for every entry
//! - `lodown first|last [INPUT] [--count N]` - Take from either end of an array
//! - `lodown index-of|contains [INPUT] --value V` - Strict-equality search
//! - `lodown filter|reject|partition [INPUT] [--where COND]` - Select elements
//! - `lodown unique [INPUT]` - Drop repeated elements
//! - `lodown pluck [INPUT] --key K` - Collect one field from every element
//! - `lodown every|some [INPUT] [--where COND]` - Quantify over entries
//! - `lodown reduce [INPUT] --op OP [--seed V]` - Fold an array
//! - `lodown extend TARGET SOURCE...` - Merge documents into the first
//!
//! INPUT is a file path, or `-` (the default) for stdin.
//!
//! Options:
//! - `--config` - Path to a `lodown.toml` (default: `./lodown.toml` if present)
//! - `--compact` - Print JSON on one line, overriding `output.pretty`

mod condition;
mod config;
mod error;
mod input;
mod run;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use condition::Condition;
use config::Config;
use error::CliError;
use input::read_document;
use run::{Output, ReduceOp};

#[derive(Parser)]
#[command(name = "lodown", version, about = "Collection utilities for JSON documents")]
struct Cli {
    /// Path to a lodown.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the type tag of the document
    TypeOf {
        /// JSON file to read (`-` for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Print every entry as `key<TAB>value`
    Entries {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Take the first element, or the first N as an array
    First {
        #[arg(default_value = "-")]
        input: PathBuf,

        /// How many elements to take (a JSON number; anything else is ignored)
        #[arg(long, allow_hyphen_values = true)]
        count: Option<String>,
    },
    /// Take the last element, or the last N as an array
    Last {
        #[arg(default_value = "-")]
        input: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        count: Option<String>,
    },
    /// Print the index of the first strictly equal element, or -1
    IndexOf {
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Value to find (JSON, or a bare string)
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Print whether a strictly equal element exists
    Contains {
        #[arg(default_value = "-")]
        input: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Keep the elements matching a condition
    Filter {
        #[arg(default_value = "-")]
        input: PathBuf,

        /// `field`, `field=VALUE` or `field!=VALUE` (default: element is truthy)
        #[arg(long = "where")]
        condition: Option<String>,
    },
    /// Keep the elements not matching a condition
    Reject {
        #[arg(default_value = "-")]
        input: PathBuf,

        #[arg(long = "where")]
        condition: Option<String>,
    },
    /// Split into `[matching, not matching]`
    Partition {
        #[arg(default_value = "-")]
        input: PathBuf,

        #[arg(long = "where")]
        condition: Option<String>,
    },
    /// Drop elements strictly equal to an earlier one
    Unique {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Collect one field from every element (`null` where missing)
    Pluck {
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Field name to collect
        #[arg(long)]
        key: String,
    },
    /// Print whether every entry matches
    Every {
        #[arg(default_value = "-")]
        input: PathBuf,

        #[arg(long = "where")]
        condition: Option<String>,
    },
    /// Print whether some entry matches
    #[command(name = "some")]
    Any {
        #[arg(default_value = "-")]
        input: PathBuf,

        #[arg(long = "where")]
        condition: Option<String>,
    },
    /// Fold an array into one value
    Reduce {
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Combining operation
        #[arg(long, value_enum)]
        op: ReduceOp,

        /// Starting value (JSON, or a bare string)
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<String>,
    },
    /// Merge each SOURCE document into TARGET and print the result
    Extend {
        /// Document receiving the entries
        target: PathBuf,

        /// Documents whose entries are copied, left to right
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Load configuration, start logging, run the command and print its output.
fn run(cli: Cli) -> Result<(), CliError> {
    let cwd = std::env::current_dir().map_err(|source| CliError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    let config = Config::load(cli.config.as_deref(), &cwd)?;
    init_tracing(&config.log.level);
    debug!(?config, "loaded configuration");

    let output = execute(cli.command)?;
    let pretty = config.output.pretty && !cli.compact;
    print_output(&output, pretty)
}

/// `RUST_LOG` wins over the configured level. Logs go to stderr so stdout
/// stays valid JSON.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn execute(command: Commands) -> Result<Output, CliError> {
    let output = match command {
        Commands::TypeOf { input } => run::type_of_command(&read_document(&input)?),
        Commands::Entries { input } => run::entries(&read_document(&input)?),
        Commands::First { input, count } => run::first(&read_document(&input)?, count.as_deref()),
        Commands::Last { input, count } => run::last(&read_document(&input)?, count.as_deref()),
        Commands::IndexOf { input, value } => run::index_of(&read_document(&input)?, &value),
        Commands::Contains { input, value } => run::contains(&read_document(&input)?, &value),
        Commands::Filter { input, condition } => {
            let condition = Condition::parse(condition.as_deref())?;
            run::filter_command(&read_document(&input)?, &condition)
        }
        Commands::Reject { input, condition } => {
            let condition = Condition::parse(condition.as_deref())?;
            run::reject_command(&read_document(&input)?, &condition)
        }
        Commands::Partition { input, condition } => {
            let condition = Condition::parse(condition.as_deref())?;
            run::partition_command(&read_document(&input)?, &condition)
        }
        Commands::Unique { input } => run::unique(&read_document(&input)?),
        Commands::Pluck { input, key } => run::pluck(&read_document(&input)?, &key),
        Commands::Every { input, condition } => {
            let condition = Condition::parse(condition.as_deref())?;
            run::every_command(&read_document(&input)?, &condition)
        }
        Commands::Any { input, condition } => {
            let condition = Condition::parse(condition.as_deref())?;
            run::some_command(&read_document(&input)?, &condition)
        }
        Commands::Reduce { input, op, seed } => {
            run::reduce_command(&read_document(&input)?, op, seed.as_deref())?
        }
        Commands::Extend { target, sources } => {
            let target = read_document(&target)?;
            let sources = sources
                .iter()
                .map(|path| read_document(path))
                .collect::<Result<Vec<Value>, _>>()?;
            run::extend(target, &sources)
        }
    };
    Ok(output)
}

fn print_output(output: &Output, pretty: bool) -> Result<(), CliError> {
    match output {
        Output::Json(value) => {
            let text = if pretty {
                serde_json::to_string_pretty(value)
            } else {
                serde_json::to_string(value)
            }
            .map_err(|e| CliError::InvalidArgument(format!("cannot serialize output: {e}")))?;
            println!("{text}");
        }
        Output::Lines(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}
