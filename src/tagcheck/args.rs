use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagcheck")]
#[command(about = "List every distinct value of selected DICOM tags across a directory tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory to scan for DICOM files
    pub root: PathBuf,

    /// Write the report to this file instead of stdout
    pub output: Option<PathBuf>,

    /// JSON config file (extensions, tag list, ordering)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Visit entries in file-system order instead of sorted by name
    #[arg(long)]
    pub native_order: bool,

    /// Match file extensions case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Never style the report, even on a terminal
    #[arg(long)]
    pub no_color: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the scan summary
    #[arg(short, long)]
    pub quiet: bool,
}
