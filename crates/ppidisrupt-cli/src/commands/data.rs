use crate::cli::{DataArgs, DataCommands};
use crate::data::DataManager;
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

pub fn run(args: DataArgs) -> Result<()> {
    match args.command {
        DataCommands::Path => {
            handle_path()?;
        }
        DataCommands::SetPath { path } => {
            handle_set_path(path)?;
        }
        DataCommands::ResetPath => {
            handle_reset_path()?;
        }
    }
    Ok(())
}

fn handle_path() -> Result<()> {
    let manager = DataManager::new()?;
    println!("{}", manager.get_data_path().display());

    for (label, path) in [
        ("network", manager.network_path()),
        ("annotations", manager.annotation_path()),
        ("matrices", manager.matrix_dir()),
    ] {
        let marker = if path.exists() { "✓" } else { "✗" };
        println!("  {} {:<12} {}", marker, label, path.display());
    }
    Ok(())
}

fn handle_set_path(path: PathBuf) -> Result<()> {
    DataManager::set_custom_path(&path)?;
    info!("Data path set to {:?}", path);
    println!("✓ Data path set to: {}", path.display());
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    DataManager::reset_path()?;
    let manager = DataManager::new()?;
    info!("Data path reset to {:?}", manager.get_data_path());
    println!(
        "✓ Data path reset to default: {}",
        manager.get_data_path().display()
    );
    Ok(())
}
