//! Sitegen command line
//!
//! ```text
//! sitegen compile site.json --out ./site [--cache images.json] [--settings sitegen.toml] [--offline]
//! sitegen diff old.json new.json
//! sitegen classify site.json "Change the logo to https://cdn.example/logo.svg"
//! sitegen schema
//! ```
//!
//! Configs ending in `.yaml` or `.yml` are read as YAML, everything else as
//! JSON.

#![warn(unreachable_pub)]

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use sitegen_compiler::{
    ImageCache, ImageResolver, ImageStatus, OfflineResolver, PlaceholdImageResolver,
    ProjectCompiler,
};
use sitegen_core::{KeywordClassifier, SitegenSettings};
use sitegen_ir::{ConfigDiff, WebsiteConfig};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Argument parser
#[must_use]
pub fn command() -> Command {
    Command::new("sitegen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile website configs into projects and route edits")
        .subcommand_required(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile a config into a project directory")
                .arg(
                    Arg::new("config")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Website config (JSON or YAML)"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Output directory"),
                )
                .arg(
                    Arg::new("cache")
                        .long("cache")
                        .value_parser(value_parser!(PathBuf))
                        .help("Image cache file, read before and rewritten after the compile"),
                )
                .arg(
                    Arg::new("settings")
                        .long("settings")
                        .value_parser(value_parser!(PathBuf))
                        .help("Settings TOML"),
                )
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .action(ArgAction::SetTrue)
                        .help("Leave image placeholders unresolved"),
                ),
        )
        .subcommand(
            Command::new("diff")
                .about("Print the field-level changes between two configs")
                .arg(Arg::new("old").required(true).value_parser(value_parser!(PathBuf)))
                .arg(Arg::new("new").required(true).value_parser(value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new("classify")
                .about("Classify an edit against a config with the keyword classifier")
                .arg(Arg::new("config").required(true).value_parser(value_parser!(PathBuf)))
                .arg(Arg::new("text").required(true).help("Edit request")),
        )
        .subcommand(Command::new("schema").about("Print the config JSON schema"))
}

/// Install the global subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Run the selected subcommand, returning what it prints
///
/// # Errors
/// Returns error if an input cannot be read or parsed, or the output cannot
/// be written
pub async fn run(matches: &ArgMatches) -> Result<String> {
    match matches.subcommand() {
        Some(("compile", args)) => compile(args).await,
        Some(("diff", args)) => {
            let old = load_config(required_path(args, "old")?)?;
            let new = load_config(required_path(args, "new")?)?;
            let diff = ConfigDiff::between(&old, &new)?;
            Ok(serde_json::to_string_pretty(&diff)?)
        }
        Some(("classify", args)) => {
            let config = load_config(required_path(args, "config")?)?;
            let text = args
                .get_one::<String>("text")
                .context("missing edit text")?;
            let verdict = KeywordClassifier::new().classify_text(text, &config).normalized();
            Ok(serde_json::to_string_pretty(&verdict)?)
        }
        Some(("schema", _)) => Ok(serde_json::to_string_pretty(&WebsiteConfig::json_schema())?),
        _ => anyhow::bail!("no subcommand given"),
    }
}

async fn compile(args: &ArgMatches) -> Result<String> {
    let config = load_config(required_path(args, "config")?)?;
    let out = required_path(args, "out")?;

    let settings = match args.get_one::<PathBuf>("settings") {
        Some(path) => SitegenSettings::load(path)?,
        None => SitegenSettings::default(),
    };

    let cache_path = args.get_one::<PathBuf>("cache");
    let previous = match cache_path {
        Some(path) if path.exists() => load_cache(path)?,
        _ => ImageCache::new(),
    };

    let resolver: Box<dyn ImageResolver> = if args.get_flag("offline") {
        Box::new(OfflineResolver)
    } else {
        Box::new(PlaceholdImageResolver::default())
    };

    let compiler = ProjectCompiler::with_options(settings.compiler);
    let project = compiler.compile(&config, &previous, resolver.as_ref()).await;
    let written = project.write_to_dir(out)?;
    info!(files = written, out = %out.display(), "project written");

    if let Some(path) = cache_path {
        let text = serde_json::to_string_pretty(&project.image_cache)?;
        std::fs::write(path, text)
            .with_context(|| format!("writing image cache {}", path.display()))?;
        debug!(entries = project.image_cache.len(), "image cache saved");
    }

    let mut summary = format!(
        "wrote {written} files to {}\nimages: {}\nfingerprint: {}\n",
        out.display(),
        status_label(&project.image_status),
        project.fingerprint()
    );
    for diagnostic in &project.diagnostics {
        writeln!(summary, "warning: {diagnostic}")?;
    }
    Ok(summary)
}

fn status_label(status: &ImageStatus) -> String {
    match status {
        ImageStatus::NoImages => "none".to_string(),
        ImageStatus::Complete => "complete".to_string(),
        ImageStatus::Partial { unresolved } => format!("partial ({} unresolved)", unresolved.len()),
        ImageStatus::Unavailable { reason } => format!("unavailable ({reason})"),
    }
}

fn required_path<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a Path> {
    args.get_one::<PathBuf>(id)
        .map(PathBuf::as_path)
        .with_context(|| format!("missing <{id}>"))
}

/// Read a config, choosing the format by extension
///
/// # Errors
/// Returns error if the file cannot be read or is not a valid config
pub fn load_config(path: &Path) -> Result<WebsiteConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let config = if yaml {
        WebsiteConfig::from_yaml(&text)
    } else {
        WebsiteConfig::from_json(&text)
    };
    config.with_context(|| format!("parsing config {}", path.display()))
}

fn load_cache(path: &Path) -> Result<ImageCache> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading image cache {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing image cache {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn log_json_is_accepted_after_subcommand() {
        let m = command()
            .try_get_matches_from(["sitegen", "schema", "--log-json"])
            .unwrap();
        assert!(m.get_flag("log-json"));
    }

    #[test]
    fn compile_requires_out() {
        let err = command()
            .try_get_matches_from(["sitegen", "compile", "site.json"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
