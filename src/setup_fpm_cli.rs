use anyhow::Result;
use clap::Parser;

use crate::commands::{filename, install, resolve};

use crate::commands::filename::FilenameCommand;
use crate::commands::install::InstallCommand;
use crate::commands::resolve::ResolveCommand;

#[derive(Debug, Parser)]
#[clap(name = "setup-fpm", about = "Install a prebuilt fpm release for CI", version)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser)]
enum Commands {
    /// Download fpm, install it as `fpm` and add it to PATH
    Install(InstallCommand),
    /// Print the fpm release tag an install would use
    Resolve(ResolveCommand),
    /// Print the release asset name for a version and platform
    Filename(FilenameCommand),
}

pub fn setup_fpm_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Install(command) => install::exec(command),
        Commands::Resolve(command) => resolve::exec(command),
        Commands::Filename(command) => filename::exec(command),
    }
}
