//! twinpane - A two-pane keyboard-driven file manager.
//!
//! Usage:
//!   tp [LEFT] [RIGHT]              Launch the two-pane TUI
//!   tp ls [PATH]                   List a folder (or the volumes)
//!   tp copy SRC DEST_DIR           Copy a file or folder into a folder
//!   tp rm PATH                     Delete a file or folder
//!   tp stats PATH                  Count folders, files and bytes
//!   tp --help                      Show help

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};

use twinpane_core::{BrowserConfig, EntryKind, EntryList};
use twinpane_ops::{
    Conflict, ConflictOutcome, ErrorLog, FileSystem, FixedResolver, ListOutcome, LocalFs, Notice,
    Notifier, OperationComplete, OperationExecutor,
};
use twinpane_tui::UserSettings;

#[derive(Parser)]
#[command(
    name = "twinpane",
    version,
    about = "A two-pane keyboard-driven file manager",
    long_about = "twinpane shows two folders side by side and copies, deletes and \
                  inspects files between them.\n\n\
                  Launch the interactive TUI by running `tp [LEFT] [RIGHT]`, or use \
                  subcommands for one-off operations."
)]
struct Cli {
    /// Folder for the left pane (defaults to the last session, then the current directory)
    left: Option<PathBuf>,

    /// Folder for the right pane (defaults to the last session, then the current directory)
    right: Option<PathBuf>,

    /// File that receives failed operations
    #[arg(long, global = true)]
    error_log: Option<PathBuf>,

    /// Leave dot-files out of listings (remembered by the TUI)
    #[arg(short = 'H', long, global = true, conflicts_with = "all")]
    no_hidden: bool,

    /// Show dot-files even if the last session hid them
    #[arg(short, long, global = true)]
    all: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List a folder, or the volumes when no path is given
    Ls {
        /// Folder to list
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Copy a file or folder into a destination folder
    Copy {
        /// File or folder to copy
        source: PathBuf,

        /// Folder that receives the copy
        dest_dir: PathBuf,

        /// Replace existing items without asking
        #[arg(short, long, conflicts_with = "skip")]
        replace: bool,

        /// Keep existing items without asking
        #[arg(short, long)]
        skip: bool,
    },

    /// Delete a file or folder recursively
    Rm {
        /// File or folder to delete
        path: PathBuf,

        /// Do not print each item as it is deleted
        #[arg(short, long)]
        quiet: bool,
    },

    /// Count the folders, files and bytes below a folder
    Stats {
        /// Folder to measure
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints engine notices to stderr.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Copying {
                source,
                destination,
            } => eprintln!("Copying {} -> {}", source.display(), destination.display()),
            Notice::Deleting { path } => eprintln!("Deleting {}", path.display()),
            Notice::Failed(error) => eprintln!("Error: {} failed: {}", error.kind, error),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let settings = UserSettings::load();

    let include_hidden = if cli.all {
        true
    } else {
        settings.show_hidden && !cli.no_hidden
    };
    let fs = LocalFs::new(include_hidden);
    let errors = ErrorLog::new(
        cli.error_log
            .clone()
            .unwrap_or_else(|| PathBuf::from(twinpane_core::DEFAULT_ERROR_LOG)),
    );
    let notifier = ConsoleNotifier;
    let exec = OperationExecutor::new(&fs, &errors).with_notifier(&notifier);

    match cli.command {
        Some(Command::Ls { path, format }) => {
            run_ls(&exec, path.as_deref(), format)?;
        }
        Some(Command::Copy {
            source,
            dest_dir,
            replace,
            skip,
        }) => {
            let source = source.canonicalize().context("Invalid source path")?;
            let dest_dir = dest_dir.canonicalize().context("Invalid destination path")?;
            let result = if replace {
                exec.copy(&source, &dest_dir, false, &FixedResolver(ConflictOutcome::Replace))
            } else if skip {
                exec.copy(&source, &dest_dir, false, &FixedResolver(ConflictOutcome::Skip))
            } else {
                exec.copy(&source, &dest_dir, false, &prompt_conflict)
            };
            report(&result, &errors)?;
        }
        Some(Command::Rm { path, quiet }) => {
            let path = path.canonicalize().context("Invalid path")?;
            let result = exec.delete(&path, quiet);
            report(&result, &errors)?;
        }
        Some(Command::Stats { path, format }) => {
            run_stats(&exec, &path, format)?;
        }
        None => {
            // Launch TUI
            let left = pane_root(cli.left, &settings.left_path)?;
            let right = pane_root(cli.right, &settings.right_path)?;

            let mut builder = BrowserConfig::builder();
            builder
                .left_root(left)
                .right_root(right)
                .include_hidden(fs.include_hidden);
            if let Some(log) = cli.error_log {
                builder.error_log(log);
            }
            let config = builder.build().context("Invalid configuration")?;

            twinpane_tui::run(config, settings)?;
        }
    }

    Ok(())
}

/// Pick the folder a pane opens: the argument, the saved path, then the
/// current directory.
fn pane_root(arg: Option<PathBuf>, saved: &Path) -> Result<PathBuf> {
    if let Some(path) = arg {
        return path.canonicalize().context("Invalid path");
    }
    if !saved.as_os_str().is_empty() && saved.is_dir() {
        return Ok(saved.to_path_buf());
    }
    std::env::current_dir().context("Cannot read the current directory")
}

/// List a folder or the volumes.
fn run_ls(exec: &OperationExecutor<'_>, path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = match path {
        Some(path) => path.canonicalize().context("Invalid path")?,
        None => PathBuf::new(),
    };
    if exec.fs().is_file(&path) {
        bail!("{} is not a folder", path.display());
    }

    let list = match exec.list(&path) {
        ListOutcome::Listed(list) => list,
        ListOutcome::Launched(path) => bail!("{} is not a folder", path.display()),
        ListOutcome::Failed(error) => return Err(error).context("Listing failed"),
    };

    match format {
        OutputFormat::Text => print_listing(exec.fs(), &list),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list)?),
    }

    Ok(())
}

fn print_listing(fs: &dyn FileSystem, list: &EntryList) {
    let title = if list.is_volume_view() {
        "Volumes".to_string()
    } else {
        list.root().display().to_string()
    };

    println!("{}", "─".repeat(60));
    println!(" {title}");
    println!("{}", "─".repeat(60));

    for (_, entry) in list.iter().enumerate().filter(|(i, _)| !list.is_parent_index(*i)) {
        let size = match entry.kind {
            EntryKind::Folder => "<DIR>".to_string(),
            EntryKind::Volume => "<VOL>".to_string(),
            EntryKind::File => fs
                .file_info(&entry.path)
                .map(|info| format_size(info.length))
                .unwrap_or_default(),
        };
        let marker = if entry.kind.is_container() { "/" } else { "" };
        println!(" {:>12}  {}{}", size, entry.name, marker);
    }
}

/// Measure a folder.
fn run_stats(exec: &OperationExecutor<'_>, path: &Path, format: OutputFormat) -> Result<()> {
    let path = path.canonicalize().context("Invalid path")?;
    if !exec.fs().is_dir(&path) {
        bail!("{} is not a folder", path.display());
    }

    let stats = exec.stats(&path);

    match format {
        OutputFormat::Text => {
            println!(" {}", path.display());
            println!("   Folders: {}", stats.dirs);
            println!("   Files:   {}", stats.files);
            println!("   Size:    {} ({} bytes)", format_size(stats.bytes), stats.bytes);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

/// Ask on the terminal how to handle one conflict.
fn prompt_conflict(conflict: &Conflict) -> ConflictOutcome {
    for line in conflict.prompt_lines() {
        eprintln!("{line}");
    }
    eprint!("[s]kip / [r]eplace / [c]ancel? ");
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return ConflictOutcome::Cancel;
    }
    match answer.trim().to_lowercase().as_str() {
        "s" | "skip" => ConflictOutcome::Skip,
        "r" | "replace" => ConflictOutcome::Replace,
        _ => ConflictOutcome::Cancel,
    }
}

/// Print the outcome of a copy or delete; failures make the command fail.
fn report(result: &OperationComplete, errors: &ErrorLog) -> Result<()> {
    println!("{}", result.summary());
    if result.failed > 0 {
        bail!("{} item(s) failed, see {}", result.failed, errors.path().display());
    }
    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
