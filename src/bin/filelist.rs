//! filelist CLI
//!
//! Inspect and edit list files from the shell.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use filelist::{Config, FileList, FileListError, LineEnding};
use tracing_subscriber::{fmt, EnvFilter};

/// filelist CLI
#[derive(Parser, Debug)]
#[command(name = "filelist")]
#[command(about = "Inspect and edit value/comment list files")]
#[command(version)]
struct Args {
    /// List file
    file: PathBuf,

    /// Write \r\n line endings
    #[arg(long, conflicts_with = "cr")]
    crlf: bool,

    /// Write \r line endings
    #[arg(long)]
    cr: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every item
    Show,

    /// Print the comment stored for a value
    Get {
        /// The value to look up
        value: String,
    },

    /// Add a value
    Add {
        /// The value to add
        value: String,

        /// Inline comment
        #[arg(short, long, default_value = "")]
        comment: String,

        /// Update the existing entry instead of appending a duplicate
        #[arg(long)]
        once: bool,
    },

    /// Remove the first entry with a value
    Remove {
        /// The value to remove
        value: String,
    },

    /// Print every item carrying exactly this comment
    Filter {
        /// The comment to match
        comment: String,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("filelist: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> filelist::Result<ExitCode> {
    let mut builder = Config::builder();
    if args.crlf {
        builder = builder.line_ending(LineEnding::CrLf);
    } else if args.cr {
        builder = builder.line_ending(LineEnding::Cr);
    }
    let config = builder.build();

    match args.command {
        Commands::Show => {
            let list = FileList::load_with_config(&args.file, config)?;
            for item in &list {
                println!("{}", item);
            }
        }
        Commands::Get { value } => {
            let list = FileList::load_with_config(&args.file, config)?;
            if !list.exists(&value) {
                return Ok(ExitCode::from(1));
            }
            println!("{}", list.get_comment(&value));
        }
        Commands::Add {
            value,
            comment,
            once,
        } => {
            let mut list = match FileList::load_with_config(&args.file, config.clone()) {
                Ok(list) => list,
                Err(FileListError::Open { source, .. })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    tracing::info!("{} not found, starting a new list", args.file.display());
                    FileList::with_config(config)
                }
                Err(e) => return Err(e),
            };
            if once {
                list.add_once(value, comment);
            } else {
                list.add(value, comment);
            }
            if list.changed() {
                list.save(&args.file)?;
            }
        }
        Commands::Remove { value } => {
            let mut list = FileList::load_with_config(&args.file, config)?;
            list.remove(&value);
            if list.changed() {
                list.save(&args.file)?;
            }
        }
        Commands::Filter { comment } => {
            let list = FileList::load_with_config(&args.file, config)?;
            for item in list.get_all_with_comment(&comment) {
                println!("{}", item);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
