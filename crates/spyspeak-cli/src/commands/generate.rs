//! Implementation of the `spyspeak generate` command.
//!
//! Responsibility: resolve word material (explicit files or a theme),
//! translate CLI arguments into a `GenerationConfig`, call the core
//! generator, and write the rendered batch.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use spyspeak_adapters::{LineFileSource, ThemeCatalog, ThreadRngSource};
use spyspeak_core::{
    application::{GeneratorService, ports::WordSource},
    domain::{CaseStyle, ExclusionSet, GenerationConfig, Pattern, RenderFormat, WordList, render},
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `spyspeak generate` command.
///
/// Dispatch sequence:
/// 1. Resolve word-file paths (theme beats explicit files beats config)
/// 2. Load words + exclusions, failing early on empty lists
/// 3. Build and validate the `GenerationConfig`
/// 4. Generate via `GeneratorService`
/// 5. Render and write to stdout or `--output FILE`
#[instrument(skip_all, fields(theme = args.theme.as_deref().unwrap_or("default")))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let material = Material::resolve(
        &config,
        args.theme.as_deref(),
        args.themes_dir.as_deref(),
        args.adjectives.as_deref(),
        args.nouns.as_deref(),
        args.exclusions.as_deref(),
    )?;
    let (adjectives, nouns, exclusions) = material.load()?;

    let gen_config = build_config(&args, &config)?;
    let format = args
        .format
        .map(RenderFormat::from)
        .unwrap_or_else(|| RenderFormat::parse_lossy(&config.defaults.format));

    debug!(
        adjectives = adjectives.len(),
        nouns = nouns.len(),
        exclusions = exclusions.len(),
        count = gen_config.count,
        "Generating"
    );

    let mut service = GeneratorService::new(Box::new(ThreadRngSource::new()));
    let codenames = service.generate(&adjectives, &nouns, &exclusions, &gen_config)?;
    let rendered = render(&codenames, format);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!(path = %path.display(), count = codenames.len(), "Batch written");
            output.success(&format!(
                "Wrote {} codename(s) to {}",
                codenames.len(),
                path.display()
            ))?;
        }
        None => {
            // The formatter adds no trailing newline; the shell terminates
            // the payload. Files get the payload byte-exact.
            println!("{rendered}");
        }
    }

    Ok(())
}

/// Build the core generation config from CLI args layered over file config.
fn build_config(args: &GenerateArgs, config: &AppConfig) -> CliResult<GenerationConfig> {
    let gen_config = GenerationConfig {
        pattern: args
            .pattern
            .map(Pattern::from)
            .unwrap_or_else(|| Pattern::parse_lossy(&config.defaults.pattern)),
        case_style: args
            .case
            .map(CaseStyle::from)
            .unwrap_or_else(|| CaseStyle::parse_lossy(&config.defaults.case)),
        separator: args
            .separator
            .clone()
            .unwrap_or_else(|| config.defaults.separator.clone()),
        min_length: args.min_length.unwrap_or(config.defaults.min_length),
        max_length: args.max_length.unwrap_or(config.defaults.max_length),
        count: args.count.unwrap_or(config.defaults.count),
    };

    // Reject bad numbers here with CLI wording; the core re-checks anyway.
    if gen_config.count < 1 {
        return Err(CliError::InvalidInput {
            message: "count must be at least 1".into(),
        });
    }
    if gen_config.min_length > 0
        && gen_config.max_length > 0
        && gen_config.min_length > gen_config.max_length
    {
        return Err(CliError::InvalidInput {
            message: "minimum length cannot be greater than maximum length".into(),
        });
    }

    Ok(gen_config)
}

// ── word material resolution ──────────────────────────────────────────────────

/// Resolved source paths for one generation run.
#[derive(Debug)]
pub struct Material {
    pub adjectives: PathBuf,
    pub nouns: PathBuf,
    pub exclusions: PathBuf,
}

impl Material {
    /// Resolve source paths: a theme (if named) supplies the word pair,
    /// otherwise explicit flags, otherwise the configured defaults. The
    /// exclusions file is independent of the theme.
    pub fn resolve(
        config: &AppConfig,
        theme: Option<&str>,
        themes_dir: Option<&Path>,
        adjectives: Option<&Path>,
        nouns: Option<&Path>,
        exclusions: Option<&Path>,
    ) -> CliResult<Self> {
        let exclusions = exclusions
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.paths.exclusions.clone());

        match theme.filter(|t| *t != "default") {
            Some(name) => {
                let dir = themes_dir
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| config.paths.themes_dir.clone());
                let catalog = ThemeCatalog::new(&dir);
                let paths = catalog.resolve(name).ok_or_else(|| CliError::ThemeNotFound {
                    name: name.to_string(),
                    dir,
                })?;
                Ok(Self {
                    adjectives: paths.adjectives,
                    nouns: paths.nouns,
                    exclusions,
                })
            }
            None => Ok(Self {
                adjectives: adjectives
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| config.paths.adjectives.clone()),
                nouns: nouns
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| config.paths.nouns.clone()),
                exclusions,
            }),
        }
    }

    /// Load the word lists and exclusion set. Either word list coming back
    /// empty is fatal at this layer; a missing exclusions file is not.
    pub fn load(&self) -> CliResult<(WordList, WordList, ExclusionSet)> {
        let source = LineFileSource::new();

        let adjectives = source.load_words(&self.adjectives);
        if adjectives.is_empty() {
            return Err(CliError::EmptyWordList {
                path: self.adjectives.clone(),
            });
        }

        let nouns = source.load_words(&self.nouns);
        if nouns.is_empty() {
            return Err(CliError::EmptyWordList {
                path: self.nouns.clone(),
            });
        }

        let exclusions = source.load_exclusions(&self.exclusions);
        Ok((adjectives, nouns, exclusions))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
