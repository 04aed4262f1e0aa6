//! CLI argument parsing for screener

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "screener")]
#[command(author, version, about = "Build market-research screener questionnaires", long_about = None)]
pub struct Cli {
    /// Log level when SCREENER_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// TOML file with the study setup
    #[arg(long, global = true)]
    pub setup: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit a screener interactively (default)
    Edit {
        #[command(flatten)]
        study: SetupArgs,

        /// Where exports are written (extension is set by the exporter)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// CSV file with extra library questions
        #[arg(long)]
        library: Option<PathBuf>,
    },

    /// Export the standard order for a study
    Export {
        #[command(flatten)]
        study: SetupArgs,

        /// Output path (extension is set by the exporter)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Document format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Keep online device checks for every mode
        #[arg(long)]
        no_mode_filter: bool,

        /// Instruction color for the html format, as #RRGGBB
        #[arg(long)]
        brand_color: Option<String>,
    },

    /// Print the standard order for a study as text
    Preview {
        #[command(flatten)]
        study: SetupArgs,

        /// Keep online device checks for every mode
        #[arg(long)]
        no_mode_filter: bool,
    },

    /// List or search the question library
    Library {
        /// CSV file with extra library questions
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Rank questions against these terms
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum search results
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Edit {
            study: SetupArgs::default(),
            out: None,
            library: None,
        }
    }
}

/// Study setup values given on the command line. They override the setup file.
#[derive(Args, Debug, Default, Clone)]
pub struct SetupArgs {
    /// Study mode: online, inperson_external or inperson_shopperlab
    #[arg(long)]
    pub mode: Option<String>,

    /// Product category, substituted for {{categoryName}}
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub moderator: Option<String>,

    #[arg(long)]
    pub dates: Option<String>,

    /// Facility address or video platform
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Word-compatible .doc, falling back to text on failure
    Html,
    /// Plain .txt
    Text,
}
