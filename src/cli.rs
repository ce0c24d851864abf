//! CLI definitions for Locus.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Locus CLI.
#[derive(Parser)]
#[command(name = "locus")]
#[command(about = "Type-keyed manager locator and bootstrapper")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.locus/config.toml)
    #[arg(short, long, global = true, env = "LOCUS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Bootstrap the demo root object and print the registry (default)
    Boot {
        /// Register the root's own component during enumeration too
        #[arg(long)]
        include_self: bool,

        /// Components to attach, overriding `root.components`
        #[arg(long, value_delimiter = ',')]
        components: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Validate the configuration file
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}
