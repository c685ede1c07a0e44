use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

pub const DEFAULT_LOG_FILE: &str = "ppidisrupt.log";
pub const DEFAULT_OUTPUT: &str = "deletions.txt";

#[derive(Parser, Debug)]
#[command(
    author = "PPI-Disrupt Developers",
    version,
    about = "PPI-Disrupt CLI - Predicts which protein-protein interactions are disrupted by a set of point mutations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable logging entirely, both to the console and to the log file
    #[arg(long, global = true)]
    pub no_log: bool,

    /// Path of the log file written alongside the console output
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Do not write a log file
    #[arg(long, global = true, conflicts_with = "log_file")]
    pub no_log_file: bool,

    /// Set the number of threads for parallel classification.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

impl Cli {
    /// The log file to write, if file logging is enabled.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        if self.no_log || self.no_log_file {
            None
        } else {
            Some(self.log_file.clone())
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify each mutation's interactions as disrupted or not.
    Classify(ClassifyArgs),
    /// Manage the local data directory (interaction network, annotations, matrices).
    Data(DataArgs),
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    // --- Inputs ---
    /// File with one dbSNP identifier (e.g. rs123) per line; may be gzipped.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub mutations: PathBuf,

    /// Interaction network edge list; defaults to the bundled consensus network.
    #[arg(short, long, value_name = "PATH")]
    pub ppin: Option<PathBuf>,

    /// Mutation annotation table; defaults to the bundled table.
    #[arg(short, long, value_name = "PATH")]
    pub annotations: Option<PathBuf>,

    /// Interface residue table restricting which partners a residue can disrupt.
    #[arg(long, value_name = "PATH")]
    pub interfaces: Option<PathBuf>,

    // --- Scoring ---
    /// Scoring strategy: 'blosum<N>' (e.g. blosum62) or 'hydrophobicity'.
    #[arg(short, long, value_name = "NAME")]
    pub classifier: Option<String>,

    /// Directory searched for BLOSUM matrix files that are not built in.
    #[arg(long, value_name = "DIR")]
    pub matrix_dir: Option<PathBuf>,

    // --- Output ---
    /// Path of the tab-separated result file (overwritten).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Optional configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Modes ---
    /// Request a refreshed interaction network instead of the local snapshot.
    #[arg(long)]
    pub update_ppin: bool,

    /// Resolve mutations from local data only.
    #[arg(long)]
    pub local_mutations: bool,

    /// Classify mutations in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S classifier.blosum-threshold=-1
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `data` subcommand.
#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(subcommand)]
    pub command: DataCommands,
}

/// Available commands for data management.
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Show the absolute path to the local data directory and the expected files.
    Path,
    /// Set a custom absolute path for the local data directory.
    SetPath {
        /// The new path to use for data files.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the data path to its default, OS-specific location.
    ResetPath,
}
