//! Implementation of the `spyspeak favorites` subcommands.
//!
//! Thin shell over the core `FavoritesService`: list, add, remove, and
//! export against the configured favorites file.

use std::path::PathBuf;

use tracing::instrument;

use spyspeak_adapters::FileFavoritesStore;
use spyspeak_core::{application::FavoritesService, domain::RenderFormat};

use crate::{
    cli::{FavoritesArgs, FavoritesCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a `spyspeak favorites` subcommand.
#[instrument(skip_all)]
pub fn execute(args: FavoritesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let path = args
        .file
        .unwrap_or_else(|| config.paths.favorites.clone());
    let service = FavoritesService::new(Box::new(FileFavoritesStore::new(path)));

    match args.command {
        FavoritesCommands::List => list(&service, &output),
        FavoritesCommands::Add { name } => add(&service, &name, &output),
        FavoritesCommands::Remove { index } => remove(&service, index, &output),
        FavoritesCommands::Export { output: dest, format } => {
            export(&service, dest, format.into(), &output)
        }
    }
}

fn list(service: &FavoritesService, output: &OutputManager) -> CliResult<()> {
    let favorites = service.load()?;
    if favorites.is_empty() {
        output.warning("No favorites found.")?;
        return Ok(());
    }
    for (i, name) in favorites.iter().enumerate() {
        println!("{}. {name}", i + 1);
    }
    Ok(())
}

fn add(service: &FavoritesService, name: &str, output: &OutputManager) -> CliResult<()> {
    let mut favorites = service.load()?;
    if service.add(&mut favorites, name)? {
        output.success(&format!("Added '{name}' to favorites."))?;
    } else {
        output.warning(&format!("Codename '{name}' is already in favorites."))?;
    }
    Ok(())
}

fn remove(service: &FavoritesService, index: usize, output: &OutputManager) -> CliResult<()> {
    let mut favorites = service.load()?;
    let removed = service.remove(&mut favorites, index)?;
    output.success(&format!("Removed '{removed}' from favorites."))?;
    Ok(())
}

fn export(
    service: &FavoritesService,
    file: Option<PathBuf>,
    format: RenderFormat,
    output: &OutputManager,
) -> CliResult<()> {
    let favorites = service.load()?;
    if favorites.is_empty() {
        return Err(CliError::NoFavorites);
    }

    let rendered = service.export(&favorites, format);
    match file {
        Some(path) => {
            std::fs::write(&path, &rendered)?;
            output.success(&format!(
                "Exported {} favorite(s) to {} in {format} format.",
                favorites.len(),
                path.display()
            ))?;
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
