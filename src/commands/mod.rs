pub mod config;
pub mod duration;
pub mod init;
pub mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Open the time-tracking form")]
    Session(session::SessionArgs),
    #[command(about = "Compute the duration between two times of day")]
    Duration(duration::DurationArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the effective configuration")]
    Config,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parses the command line and runs the chosen command. Without a
    /// subcommand the interactive session opens.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Session(args)) => session::cmd(args),
            Some(Commands::Duration(args)) => duration::cmd(args),
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Config) => config::cmd(),
            None => session::cmd(session::SessionArgs::default()),
        }
    }
}
