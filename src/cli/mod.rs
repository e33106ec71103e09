use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "expression-builder",
    about = "Inspect the filterable properties of a type schema",
    version,
    author,
    long_about = None
)]
pub struct ExpressionCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every property discovered in a schema
    List {
        /// Path to the YAML type schema
        #[arg(short, long)]
        schema: PathBuf,

        /// Resource catalog for display names (YAML or JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Locale used for display names
        #[arg(long)]
        locale: Option<String>,
    },

    /// Show the details of a single property
    Show {
        /// Path to the YAML type schema
        #[arg(short, long)]
        schema: PathBuf,

        /// Property id, e.g. address.city
        #[arg(short, long)]
        id: String,

        /// Resource catalog for display names (YAML or JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Locale used for display names
        #[arg(long)]
        locale: Option<String>,
    },
}
