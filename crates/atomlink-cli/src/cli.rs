use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "AtomLink Developers",
    version,
    about = "AtomLink CLI - A command-line interface for inspecting and validating the metadata documents exchanged between simulation engines and atomistic machine learning models.",
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

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that metadata documents are well-formed and of a supported version.
    Validate(ValidateArgs),
    /// Print a human-readable summary of one metadata document.
    Show(ShowArgs),
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Paths of the JSON documents to validate.
    #[arg(required = true, value_name = "PATH", num_args(1..))]
    pub files: Vec<PathBuf>,

    /// Require every document to be of this record type,
    /// instead of reading the class tag from each document.
    #[arg(short, long, value_enum, value_name = "CLASS")]
    pub class: Option<RecordClass>,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path of the JSON document to display.
    #[arg(required = true, value_name = "PATH")]
    pub file: PathBuf,
}

/// The record types understood by this tool.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordClass {
    /// A neighbor list request.
    NeighborListOptions,
    /// A single output description.
    Output,
    /// A model capability manifest.
    Capabilities,
    /// An engine run request.
    RunOptions,
    /// Model provenance information.
    Metadata,
}
