//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reposcope")]
#[command(about = "Keybindings, line classification and a pager for git output", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  reposcope keys --keymap main\n  git log -p | reposcope classify -\n  git show HEAD > show.txt && reposcope view show.txt\n"
)]
pub struct Cli {
    /// Configuration file to use instead of searching for .reposcope.toml
    #[arg(long, global = true, env = "REPOSCOPE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not write a log file
    #[arg(long, global = true)]
    pub no_log: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the key legend of every keymap
    Keys {
        /// Only show this keymap
        #[arg(short, long)]
        keymap: Option<String>,

        /// Print the legend as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the category and color pair of each line of a file
    Classify {
        /// File to classify, `-` for standard input
        file: PathBuf,
    },

    /// Page through a file using the configured keybindings
    View {
        /// File to show, `-` for standard input
        file: PathBuf,
    },
}
