use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "depot")]
#[command(about = "Folder-scoped file depot with fuzzy filename search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage root (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a folder
    Mkdir {
        name: String,

        /// Fail if the folder already exists instead of ignoring
        #[arg(long)]
        strict: bool,
    },

    /// Delete a folder and everything in it
    Rmdir { name: String },

    /// List all folders
    Folders,

    /// List the files in a folder
    Ls { folder: String },

    /// Store a file in a folder
    Put {
        folder: String,

        /// Path of the file to store
        file: PathBuf,

        /// Keep the source filename instead of generating an opaque one
        #[arg(long)]
        keep_name: bool,
    },

    /// Retrieve a file by (possibly partial) name
    Get {
        folder: String,

        /// Exact filename or a fragment of its base name
        query: String,

        /// Directory to write the retrieved file into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Delete one file
    Rm { folder: String, name: String },

    /// Search filenames, in one folder or across all of them
    Search {
        /// Substring to look for (omit to list everything)
        #[arg(default_value = "")]
        term: String,

        /// Confine the search to one folder
        #[arg(short, long)]
        folder: Option<String>,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
}
