//! Implementation of the `spyspeak themes` command.

use tracing::instrument;

use spyspeak_adapters::ThemeCatalog;

use crate::{
    cli::{ThemesArgs, ThemesFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// List the themes available in the themes directory.
#[instrument(skip_all)]
pub fn execute(args: ThemesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dir = args.dir.unwrap_or_else(|| config.paths.themes_dir.clone());
    let themes = ThemeCatalog::new(&dir).themes();

    match args.format {
        ThemesFormat::Plain => {
            if themes.is_empty() {
                output.warning(&format!(
                    "No themes available. Create theme files in {}",
                    dir.display()
                ))?;
                return Ok(());
            }
            for theme in &themes {
                println!("{theme}");
            }
        }
        ThemesFormat::Json => {
            let doc = serde_json::json!({ "themes": themes });
            println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        }
    }

    Ok(())
}
