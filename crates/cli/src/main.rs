use clap::Parser;
use snapenv_core::{RES_DIR, SNAPENV_LOG_VAR, SNAP_DATA_VAR};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "snapenv")]
#[command(about = "Compiles snap options into per-service environment override files", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory the override files are written to
    /// (defaults to $SNAP_DATA/config/res)
    #[arg(long, value_name = "DIR")]
    res_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(SNAPENV_LOG_VAR).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let res_dir = match cli.res_dir {
        Some(dir) => dir,
        None => default_res_dir()?,
    };
    tracing::debug!(res_dir = %res_dir.display(), "writing override files");

    cli.command.execute(res_dir)
}

fn default_res_dir() -> eyre::Result<PathBuf> {
    let data = std::env::var(SNAP_DATA_VAR)
        .map_err(|_| eyre::eyre!("{SNAP_DATA_VAR} is not set; pass --res-dir outside a snap"))?;
    Ok(PathBuf::from(data).join(RES_DIR))
}
