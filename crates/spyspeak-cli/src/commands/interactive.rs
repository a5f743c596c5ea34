//! Interactive console session.
//!
//! A menu-driven shell over the same services the flag-driven commands use.
//! The loop is an explicit state machine: every prompt round resolves to a
//! [`MenuState`], and all mutable context lives in a [`Session`] value that
//! is passed around rather than held in globals.

use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use tracing::{debug, instrument};

use spyspeak_adapters::{FileFavoritesStore, LineFileSource, ThemeCatalog, ThreadRngSource};
use spyspeak_core::{
    application::{FavoritesService, GeneratorService, ports::WordSource},
    domain::{CaseStyle, ExclusionSet, GenerationConfig, Pattern, RenderFormat, render},
};

use crate::{
    commands::generate::Material,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const PATTERNS: [Pattern; 5] = [
    Pattern::AdjNoun,
    Pattern::NounNoun,
    Pattern::AdjAdjNoun,
    Pattern::NounAdj,
    Pattern::AdjNounNumber,
];

const CASE_STYLES: [CaseStyle; 4] = [
    CaseStyle::Title,
    CaseStyle::Upper,
    CaseStyle::Lower,
    CaseStyle::Sentence,
];

const FORMATS: [RenderFormat; 4] = [
    RenderFormat::Text,
    RenderFormat::Json,
    RenderFormat::Csv,
    RenderFormat::Html,
];

/// Where the console goes next after a completed prompt round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Main,
    GenerateOne,
    GenerateBatch,
    ViewFavorites,
    ManageFavorites,
    Settings,
    Quit,
}

/// All mutable console context: the active theme and generation settings.
struct Session {
    theme: Option<String>,
    r#gen: GenerationConfig,
    format: RenderFormat,
}

impl Session {
    fn new(config: &AppConfig) -> Self {
        Self {
            theme: None,
            r#gen: GenerationConfig {
                pattern: Pattern::parse_lossy(&config.defaults.pattern),
                case_style: CaseStyle::parse_lossy(&config.defaults.case),
                separator: config.defaults.separator.clone(),
                min_length: config.defaults.min_length,
                max_length: config.defaults.max_length,
                count: config.defaults.count.max(1),
            },
            format: RenderFormat::parse_lossy(&config.defaults.format),
        }
    }
}

fn prompt_err(e: dialoguer::Error) -> CliError {
    CliError::PromptFailed {
        message: e.to_string(),
    }
}

/// Run the console until the user quits.
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut session = Session::new(&config);
    let favorites = FavoritesService::new(Box::new(FileFavoritesStore::new(
        config.paths.favorites.clone(),
    )));

    output.header("SpySpeak interactive console")?;

    let mut state = MenuState::Main;
    loop {
        debug!(?state, "Console state");
        state = match state {
            MenuState::Main => main_menu()?,
            MenuState::GenerateOne => {
                generate_one(&mut session, &config, &favorites, &output)?;
                MenuState::Main
            }
            MenuState::GenerateBatch => {
                generate_batch(&mut session, &config, &output)?;
                MenuState::Main
            }
            MenuState::ViewFavorites => {
                view_favorites(&favorites, &output)?;
                MenuState::Main
            }
            MenuState::ManageFavorites => {
                manage_favorites(&favorites, &output)?;
                MenuState::Main
            }
            MenuState::Settings => {
                settings(&mut session, &config, &output)?;
                MenuState::Main
            }
            MenuState::Quit => break,
        };
    }

    output.print("Goodbye.")?;
    Ok(())
}

fn main_menu() -> CliResult<MenuState> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What would you like to do?")
        .items(&[
            "Generate a codename",
            "Generate a batch",
            "View favorites",
            "Manage favorites",
            "Settings",
            "Quit",
        ])
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    Ok(match choice {
        0 => MenuState::GenerateOne,
        1 => MenuState::GenerateBatch,
        2 => MenuState::ViewFavorites,
        3 => MenuState::ManageFavorites,
        4 => MenuState::Settings,
        _ => MenuState::Quit,
    })
}

/// One codename, with an offer to save it.
fn generate_one(
    session: &mut Session,
    config: &AppConfig,
    favorites: &FavoritesService,
    output: &OutputManager,
) -> CliResult<()> {
    let gen_config = GenerationConfig {
        count: 1,
        ..session.r#gen.clone()
    };
    let codenames = match run_generation(session, config, &gen_config) {
        Ok(codenames) => codenames,
        Err(e) => {
            output.error(&e.to_string())?;
            return Ok(());
        }
    };
    let name = &codenames[0];
    output.header(name)?;

    let save = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Save to favorites?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    if save {
        let mut stored = favorites.load()?;
        if favorites.add(&mut stored, name)? {
            output.success("Saved.")?;
        } else {
            output.warning("Already in favorites.")?;
        }
    }
    Ok(())
}

/// A batch in a chosen format, optionally written to a file.
fn generate_batch(
    session: &mut Session,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let count: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("How many?")
        .default(session.r#gen.count.max(1))
        .interact_text()
        .map_err(prompt_err)?;
    if count < 1 {
        output.error("Count must be at least 1.")?;
        return Ok(());
    }
    session.r#gen.count = count;

    session.format = pick_format(session.format)?;

    let codenames = match run_generation(session, config, &session.r#gen.clone()) {
        Ok(codenames) => codenames,
        Err(e) => {
            output.error(&e.to_string())?;
            return Ok(());
        }
    };
    let rendered = render(&codenames, session.format);
    println!("{rendered}");

    let to_file = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Write to a file?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    if to_file {
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("File path")
            .interact_text()
            .map_err(prompt_err)?;
        std::fs::write(PathBuf::from(&path), &rendered)?;
        output.success(&format!("Wrote {} codename(s) to {path}", codenames.len()))?;
    }
    Ok(())
}

fn view_favorites(favorites: &FavoritesService, output: &OutputManager) -> CliResult<()> {
    let stored = favorites.load()?;
    if stored.is_empty() {
        output.warning("No favorites yet.")?;
        return Ok(());
    }
    for (i, name) in stored.iter().enumerate() {
        output.print(&format!("{}. {name}", i + 1))?;
    }
    Ok(())
}

fn manage_favorites(favorites: &FavoritesService, output: &OutputManager) -> CliResult<()> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Favorites")
        .items(&["Add", "Remove", "Export", "Back"])
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    match choice {
        0 => {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Codename to save")
                .interact_text()
                .map_err(prompt_err)?;
            let mut stored = favorites.load()?;
            if favorites.add(&mut stored, name.trim())? {
                output.success("Saved.")?;
            } else {
                output.warning("Already in favorites.")?;
            }
        }
        1 => {
            let mut stored = favorites.load()?;
            if stored.is_empty() {
                output.warning("No favorites to remove.")?;
                return Ok(());
            }
            let index = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Remove which?")
                .items(&stored)
                .default(0)
                .interact()
                .map_err(prompt_err)?;
            let removed = favorites.remove(&mut stored, index + 1)?;
            output.success(&format!("Removed '{removed}'."))?;
        }
        2 => {
            let stored = favorites.load()?;
            if stored.is_empty() {
                output.warning("No favorites to export.")?;
                return Ok(());
            }
            let format = pick_format(RenderFormat::Text)?;
            let path: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Export to file")
                .interact_text()
                .map_err(prompt_err)?;
            std::fs::write(PathBuf::from(&path), favorites.export(&stored, format))?;
            output.success(&format!(
                "Exported {} favorite(s) to {path} in {format} format.",
                stored.len()
            ))?;
        }
        _ => {}
    }
    Ok(())
}

/// Adjust the session's theme and generation settings.
fn settings(session: &mut Session, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    loop {
        let current = format!(
            "theme={} pattern={} case={} separator={:?} lengths=[{},{}]",
            session.theme.as_deref().unwrap_or("default"),
            session.r#gen.pattern,
            session.r#gen.case_style,
            session.r#gen.separator,
            session.r#gen.min_length,
            session.r#gen.max_length,
        );
        output.info(&current)?;

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Change which setting?")
            .items(&[
                "Theme",
                "Pattern",
                "Case style",
                "Separator",
                "Length limits",
                "Exclusions",
                "Back",
            ])
            .default(6)
            .interact()
            .map_err(prompt_err)?;

        match choice {
            0 => {
                let mut names = vec!["default".to_string()];
                names.extend(ThemeCatalog::new(&config.paths.themes_dir).themes());
                let picked = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Theme")
                    .items(&names)
                    .default(0)
                    .interact()
                    .map_err(prompt_err)?;
                session.theme = (picked > 0).then(|| names[picked].clone());
            }
            1 => {
                let labels: Vec<&str> = PATTERNS.iter().map(|p| p.as_str()).collect();
                let picked = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Pattern")
                    .items(&labels)
                    .default(0)
                    .interact()
                    .map_err(prompt_err)?;
                session.r#gen.pattern = PATTERNS[picked];
            }
            2 => {
                let labels: Vec<&str> = CASE_STYLES.iter().map(|c| c.as_str()).collect();
                let picked = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Case style")
                    .items(&labels)
                    .default(0)
                    .interact()
                    .map_err(prompt_err)?;
                session.r#gen.case_style = CASE_STYLES[picked];
            }
            3 => {
                let separator: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Separator")
                    .with_initial_text(session.r#gen.separator.clone())
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_err)?;
                session.r#gen.separator = separator;
            }
            4 => {
                let min: usize = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Minimum word length (0 = none)")
                    .default(session.r#gen.min_length)
                    .interact_text()
                    .map_err(prompt_err)?;
                let max: usize = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Maximum word length (0 = none)")
                    .default(session.r#gen.max_length)
                    .interact_text()
                    .map_err(prompt_err)?;
                if min > 0 && max > 0 && min > max {
                    output.error("Minimum cannot be greater than maximum.")?;
                } else {
                    session.r#gen.min_length = min;
                    session.r#gen.max_length = max;
                }
            }
            5 => manage_exclusions(config, output)?,
            _ => return Ok(()),
        }
    }
}

/// View, extend, or clear the persisted exclusion list. Changes take effect
/// on the next generation, which reloads its material from disk.
fn manage_exclusions(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let path = &config.paths.exclusions;
    let mut exclusions = LineFileSource::new().load_exclusions(path);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Exclusions")
        .items(&["View", "Add words", "Clear", "Back"])
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    match choice {
        0 => {
            if exclusions.is_empty() {
                output.info("No exclusions set.")?;
            } else {
                let mut terms: Vec<&str> = exclusions.iter().collect();
                terms.sort_unstable();
                output.print(&terms.join(", "))?;
            }
        }
        1 => {
            let line: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Words to exclude (comma-separated)")
                .interact_text()
                .map_err(prompt_err)?;
            let added = add_exclusion_terms(&mut exclusions, &line);
            write_exclusions(path, &exclusions)?;
            output.success(&format!("Added {added} exclusion(s)."))?;
        }
        2 => {
            write_exclusions(path, &ExclusionSet::default())?;
            output.success("Exclusions cleared.")?;
        }
        _ => {}
    }
    Ok(())
}

/// Merge comma-separated terms into the set; returns how many were new.
fn add_exclusion_terms(exclusions: &mut ExclusionSet, input: &str) -> usize {
    input.split(',').filter(|term| exclusions.insert(term)).count()
}

/// Persist the set, one term per line, sorted.
fn write_exclusions(path: &Path, exclusions: &ExclusionSet) -> CliResult<()> {
    let mut terms: Vec<&str> = exclusions.iter().collect();
    terms.sort_unstable();
    let mut body = terms.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    std::fs::write(path, body)?;
    Ok(())
}

fn pick_format(current: RenderFormat) -> CliResult<RenderFormat> {
    let labels: Vec<&str> = FORMATS.iter().map(|f| f.as_str()).collect();
    let default = FORMATS.iter().position(|f| *f == current).unwrap_or(0);
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Format")
        .items(&labels)
        .default(default)
        .interact()
        .map_err(prompt_err)?;
    Ok(FORMATS[picked])
}

/// Resolve material for the session's theme and run the generator.
fn run_generation(
    session: &Session,
    config: &AppConfig,
    gen_config: &GenerationConfig,
) -> CliResult<Vec<String>> {
    let material = Material::resolve(config, session.theme.as_deref(), None, None, None, None)?;
    let (adjectives, nouns, exclusions) = material.load()?;
    let mut service = GeneratorService::new(Box::new(ThreadRngSource::new()));
    Ok(service.generate(&adjectives, &nouns, &exclusions, gen_config)?)
}

// ── tests ─────────────────────────────────────────────────────────────────────
