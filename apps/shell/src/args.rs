//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use hunt::records::EntityKind;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "hunt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect the composed platform and work with entity records")]
pub(crate) struct Cli {
    /// Configuration file (TOML, YAML or JSON); `HUNT__*` variables override it.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List composed aspects in registration order
    Aspects {},
    /// Print ordered slot contributions as JSON
    Slots {
        /// Only this extension point (e.g. `header.links`)
        #[arg(short, long)]
        slot: Option<String>,
    },
    /// Print mock records as a JSON array
    Mock {
        /// Entity kind (user, product, launch, review, forum, upvote)
        kind: EntityKind,
        /// Number of records; missing overrides default to `{}`
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// JSON object shallow-merged onto the defaults (repeatable)
        #[arg(short, long = "patch")]
        patches: Vec<String>,
    },
    /// Pass plain records through the entity boundary and print the result
    Normalize {
        /// Entity kind (user, product, launch, review, forum, upvote)
        kind: EntityKind,
        /// JSON file holding an object or an array of objects; `-` reads stdin
        input: PathBuf,
    },
}
