use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "propmap")]
#[command(about = "Inspect and convert metadata classifications", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (overrides the user config file)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered classification types and the attributes they own
    #[command(alias = "t")]
    Types,

    /// List enumeration domains and their values
    #[command(alias = "d")]
    Domains,

    /// Decode generic classifications (JSON) into typed views
    Decode {
        /// File holding one classification or an array of them
        file: PathBuf,
    },

    /// Encode a typed classification (JSON) into its property bag
    Encode {
        /// File holding one typed classification
        file: PathBuf,
    },

    /// Print a commented config file template
    Config,
}
