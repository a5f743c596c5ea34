//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use spyspeak_core::domain::{CaseStyle, Pattern, RenderFormat};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "spyspeak",
    bin_name = "spyspeak",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f575} Randomized codename generation",
    long_about = "SpySpeak combines adjectives and nouns from word-list files \
                  into randomized codenames, with patterns, case styles, \
                  themes, and multiple output formats.",
    after_help = "EXAMPLES:\n\
        \x20 spyspeak generate --count 5\n\
        \x20 spyspeak generate --theme space --pattern adj-noun-number --format json\n\
        \x20 spyspeak themes\n\
        \x20 spyspeak favorites add \"Brave Tiger\"\n\
        \x20 spyspeak serve --port 5000",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a batch of codenames.
    #[command(
        visible_alias = "gen",
        about = "Generate codenames",
        after_help = "EXAMPLES:\n\
            \x20 spyspeak generate\n\
            \x20 spyspeak generate -c 10 --separator - --case lower\n\
            \x20 spyspeak generate --theme animals --format csv -o names.csv"
    )]
    Generate(GenerateArgs),

    /// List available themes.
    #[command(
        visible_alias = "ls",
        about = "List available themes",
        after_help = "EXAMPLES:\n\
            \x20 spyspeak themes\n\
            \x20 spyspeak themes --format json"
    )]
    Themes(ThemesArgs),

    /// Manage the favorites list.
    #[command(
        about = "Manage favorites",
        after_help = "EXAMPLES:\n\
            \x20 spyspeak favorites list\n\
            \x20 spyspeak favorites add \"Brave Tiger\"\n\
            \x20 spyspeak favorites remove 2\n\
            \x20 spyspeak favorites export names.json --format json"
    )]
    Favorites(FavoritesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 spyspeak completions bash > ~/.local/share/bash-completion/completions/spyspeak\n\
            \x20 spyspeak completions zsh  > ~/.zfunc/_spyspeak\n\
            \x20 spyspeak completions fish > ~/.config/fish/completions/spyspeak.fish"
    )]
    Completions(CompletionsArgs),

    /// Run the interactive console.
    #[command(about = "Interactive console session")]
    Interactive,

    /// Run the HTTP server.
    #[command(
        about = "Serve codenames over HTTP",
        after_help = "EXAMPLES:\n\
            \x20 spyspeak serve\n\
            \x20 spyspeak serve --host 0.0.0.0 --port 8080\n\
            \x20 curl 'http://127.0.0.1:5000/api/codenames?count=3&pattern=noun-noun'"
    )]
    Serve(ServeArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `spyspeak generate`.
#[derive(Debug, Args, Default)]
pub struct GenerateArgs {
    /// Path to the adjectives file.
    #[arg(short = 'a', long = "adjectives", value_name = "FILE")]
    pub adjectives: Option<PathBuf>,

    /// Path to the nouns file.
    #[arg(short = 'n', long = "nouns", value_name = "FILE")]
    pub nouns: Option<PathBuf>,

    /// Use a named theme instead of the default word files.
    #[arg(short = 't', long = "theme", value_name = "NAME")]
    pub theme: Option<String>,

    /// Directory containing theme word files.
    #[arg(long = "themes-dir", value_name = "DIR")]
    pub themes_dir: Option<PathBuf>,

    /// Path to the exclusions file.
    #[arg(short = 'e', long = "exclusions", value_name = "FILE")]
    pub exclusions: Option<PathBuf>,

    /// Number of codenames to generate.
    #[arg(short = 'c', long = "count", value_name = "N")]
    pub count: Option<usize>,

    /// Separator placed between words.
    #[arg(short = 's', long = "separator", value_name = "SEP")]
    pub separator: Option<String>,

    /// Pattern used to assemble each codename.
    #[arg(short = 'p', long = "pattern", value_enum, value_name = "PATTERN")]
    pub pattern: Option<PatternArg>,

    /// Case style applied to each codename.
    #[arg(long = "case", value_enum, value_name = "STYLE")]
    pub case: Option<CaseArg>,

    /// Minimum word length (0 for no minimum).
    #[arg(long = "min-length", value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum word length (0 for no maximum).
    #[arg(long = "max-length", value_name = "N")]
    pub max_length: Option<usize>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Write output to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

// ── themes ────────────────────────────────────────────────────────────────────

/// Arguments for `spyspeak themes`.
#[derive(Debug, Args)]
pub struct ThemesArgs {
    /// Directory containing theme word files.
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "plain")]
    pub format: ThemesFormat,
}

/// Output format for the `themes` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemesFormat {
    /// One theme name per line.
    Plain,
    /// JSON array.
    Json,
}

// ── favorites ─────────────────────────────────────────────────────────────────

/// Arguments for `spyspeak favorites`.
#[derive(Debug, Args)]
pub struct FavoritesArgs {
    /// Path to the favorites file.
    #[arg(long = "file", value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: FavoritesCommands,
}

/// Subcommands for `spyspeak favorites`.
#[derive(Debug, Subcommand)]
pub enum FavoritesCommands {
    /// Print the saved favorites, one per line with its index.
    List,
    /// Add a codename to the favorites.
    Add {
        /// The codename to save.
        name: String,
    },
    /// Remove the favorite at a 1-based index.
    Remove {
        /// 1-based index as shown by `favorites list`.
        index: usize,
    },
    /// Export the favorites in a render format.
    Export {
        /// Destination file; stdout when omitted.
        #[arg(value_name = "DEST")]
        output: Option<PathBuf>,
        /// Export format.
        #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
        format: FormatArg,
    },
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `spyspeak completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── serve ─────────────────────────────────────────────────────────────────────

/// Arguments for `spyspeak serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind.
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    pub port: Option<u16>,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Codename assembly pattern (CLI-side strict mirror of the domain enum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum PatternArg {
    AdjNoun,
    NounNoun,
    AdjAdjNoun,
    NounAdj,
    AdjNounNumber,
}

impl From<PatternArg> for Pattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::AdjNoun => Pattern::AdjNoun,
            PatternArg::NounNoun => Pattern::NounNoun,
            PatternArg::AdjAdjNoun => Pattern::AdjAdjNoun,
            PatternArg::NounAdj => Pattern::NounAdj,
            PatternArg::AdjNounNumber => Pattern::AdjNounNumber,
        }
    }
}

/// Case style (CLI-side strict mirror).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CaseArg {
    Title,
    Upper,
    Lower,
    Sentence,
}

impl From<CaseArg> for CaseStyle {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Title => CaseStyle::Title,
            CaseArg::Upper => CaseStyle::Upper,
            CaseArg::Lower => CaseStyle::Lower,
            CaseArg::Sentence => CaseStyle::Sentence,
        }
    }
}

/// Render format (CLI-side strict mirror).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    Text,
    Json,
    Csv,
    Html,
}

impl From<FormatArg> for RenderFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => RenderFormat::Text,
            FormatArg::Json => RenderFormat::Json,
            FormatArg::Csv => RenderFormat::Csv,
            FormatArg::Html => RenderFormat::Html,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "spyspeak",
            "generate",
            "--count",
            "5",
            "--pattern",
            "noun-noun",
            "--case",
            "lower",
            "--format",
            "json",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.count, Some(5));
        assert_eq!(args.pattern, Some(PatternArg::NounNoun));
        assert_eq!(args.case, Some(CaseArg::Lower));
        assert_eq!(args.format, Some(FormatArg::Json));
    }

    #[test]
    fn generate_alias_gen() {
        let cli = Cli::parse_from(["spyspeak", "gen", "-c", "2"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn pattern_args_map_to_domain() {
        assert_eq!(Pattern::from(PatternArg::AdjNounNumber), Pattern::AdjNounNumber);
        assert_eq!(Pattern::from(PatternArg::NounAdj), Pattern::NounAdj);
    }

    #[test]
    fn unknown_pattern_is_rejected_by_clap() {
        let result = Cli::try_parse_from(["spyspeak", "generate", "--pattern", "verb-noun"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_favorites_remove() {
        let cli = Cli::parse_from(["spyspeak", "favorites", "remove", "3"]);
        let Commands::Favorites(args) = cli.command else {
            panic!("expected Favorites command");
        };
        assert!(matches!(args.command, FavoritesCommands::Remove { index: 3 }));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["spyspeak", "--quiet", "--verbose", "themes"]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_accepts_host_and_port() {
        let cli = Cli::parse_from(["spyspeak", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        let Commands::Serve(args) = cli.command else {
            panic!("expected Serve command");
        };
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(8080));
    }
}
