//! Command-line access to the comment widget locale tables.

use std::collections::HashMap;
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use anyhow::Context;
use clap::{
    Parser,
    Subcommand,
};
use comment_locale::LocaleRegistry;
use comment_locale::config::{
    self,
    ResourceSettings,
};
use comment_locale::input::resource::load_key_ranges;
use comment_locale::types::SourceRange;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "comment-locale", version, about = "Inspect comment widget locale tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Resource directory to load on top of the built-in locales.
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the raw value of a key.
    Get {
        locale: String,
        key: String,
        /// Print singular and plural forms on separate labelled lines.
        #[arg(long)]
        forms: bool,
    },
    /// Print a locale table as JSON.
    Dump { locale: String },
    /// List the loaded locales.
    Locales,
    /// Validate every loaded table against the widget keys.
    ///
    /// Issues in resource files are reported at the key's `line:column`.
    Check,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // `check` reports every issue instead of stopping at the first table.
    let strict = !matches!(cli.command, Command::Check);
    let registry = open_registry(cli.dir.as_deref(), strict)?;

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Get { locale, key, forms } => {
            let table = registry.table(&locale)?;
            if forms {
                let forms = table.forms(&key)?;
                writeln!(out, "singular: {}", forms.singular)?;
                if let Some(plural) = forms.plural {
                    writeln!(out, "plural: {plural}")?;
                }
            } else {
                writeln!(out, "{}", table.get(&key)?)?;
            }
        }
        Command::Dump { locale } => {
            let table = registry.table(&locale)?;
            let json = serde_json::to_string_pretty(table.entries())?;
            writeln!(out, "{json}")?;
        }
        Command::Locales => {
            for locale in registry.locales() {
                writeln!(out, "{locale}")?;
            }
        }
        Command::Check => {
            let mut failed = false;
            for table in registry.tables() {
                let issues = table.validate();
                if issues.is_empty() {
                    writeln!(out, "{}: ok", table.locale())?;
                    continue;
                }

                let source = registry.source(table.locale());
                let positions: HashMap<String, SourceRange> = match source {
                    Some(path) => load_key_ranges(path)?.into_iter().collect(),
                    None => HashMap::new(),
                };
                for issue in issues {
                    failed |= issue.is_error();
                    let level = if issue.is_error() { "error" } else { "warning" };
                    match (source, positions.get(&issue.key)) {
                        (Some(path), Some(range)) => {
                            writeln!(out, "{}:{}: {level}: {issue}", path.display(), range.start)?;
                        }
                        _ => writeln!(out, "{}: {level}: {issue}", table.locale())?,
                    }
                }
            }
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn open_registry(dir: Option<&Path>, strict: bool) -> anyhow::Result<LocaleRegistry> {
    let Some(dir) = dir else {
        return Ok(LocaleRegistry::with_builtin());
    };

    let settings = config::load_from_dir(dir)
        .with_context(|| format!("Failed to load settings from {}", dir.display()))?
        .unwrap_or_default();
    let settings = ResourceSettings { strict: settings.strict && strict, ..settings };

    LocaleRegistry::load_dir(dir, &settings)
        .with_context(|| format!("Failed to load locale resources from {}", dir.display()))
}
