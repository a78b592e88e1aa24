use clap::{Args, Parser, Subcommand};
use scanlist_core::Platform;
use scanlist_export::PermissionStatus;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scanlist")]
#[command(about = "A terminal item list with spreadsheet export", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the config file (or set SCANLIST_CONFIG env var)
    #[arg(long, value_name = "FILE", env = "SCANLIST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export items to an .xlsx file without starting the TUI
    Export(ExportArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ExportArgs {
    /// Item text, in list order (repeatable)
    #[arg(long = "item", value_name = "TEXT")]
    pub items: Vec<String>,
    /// Platform whose storage rules apply (defaults to config, then the host)
    #[arg(long)]
    pub platform: Option<Platform>,
    /// Answer given to the storage permission request
    #[arg(long, default_value = "granted")]
    pub permission: PermissionStatus,
    /// Skip the share step and only save the file
    #[arg(long)]
    pub no_share: bool,
    /// Write Downloads, documents and cache under this directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}
