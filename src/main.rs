//! netview CLI - Command line interface for netview
//!
//! Loads a view configuration file and resolves addresses to areas.
//! Output is JSON on stdout; logs go to stderr (set RUST_LOG to see them).

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use netview::{OutputFormat, Settings, SettingsStore, View};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netview")]
#[command(about = "Resolve IPv4 addresses to view areas by longest-prefix match")]
#[command(version)]
struct Cli {
    /// Path to the view configuration file
    #[arg(short = 'c', long)]
    view_file: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Path to the settings file (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more addresses to their areas
    Lookup {
        /// Dotted-quad IPv4 addresses
        #[arg(required = true)]
        addresses: Vec<String>,
        /// Also list every less specific subnet containing the address
        #[arg(short, long)]
        all: bool,
    },

    /// Validate the view file and report what it contains
    Check,

    /// List every subnet binding in address order
    List,

    /// Inspect or change persistent settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current settings
    Show,
    /// Remember a default view file
    SetFile {
        /// Path to the view configuration file
        path: PathBuf,
    },
    /// Remember a default output format
    SetFormat {
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let store = match &cli.settings {
        Some(path) => SettingsStore::with_path(path),
        None => SettingsStore::new()?,
    };
    let settings = store.load()?;
    debug!("Settings loaded from {}", store.path().display());

    let format = cli.format.or(settings.format).unwrap_or(OutputFormat::Json);

    match cli.command {
        Commands::Lookup { addresses, all } => {
            let view = open_view(&settings, cli.view_file)?;
            let mut items = Vec::with_capacity(addresses.len());

            for address in &addresses {
                let entry = view
                    .lookup(address)
                    .with_context(|| format!("Cannot look up {}", address))?;

                let mut item = match entry {
                    Some(entry) => serde_json::json!({
                        "address": address,
                        "area": entry.area,
                        "subnet": entry.subnet
                    }),
                    None => serde_json::json!({
                        "address": address,
                        "area": null,
                        "subnet": null
                    }),
                };

                if all {
                    let matches: Vec<_> = view
                        .matches(address)?
                        .iter()
                        .map(|(subnet, entry)| {
                            serde_json::json!({
                                "subnet": subnet,
                                "area": entry.area
                            })
                        })
                        .collect();
                    item["matches"] = serde_json::Value::Array(matches);
                }

                items.push(item);
            }

            output(
                &format,
                &serde_json::json!({
                    "count": items.len(),
                    "results": items
                }),
            )?;
        }

        Commands::Check => {
            let view = open_view(&settings, cli.view_file)?;
            output(
                &format,
                &serde_json::json!({
                    "status": "ok",
                    "file": view.source(),
                    "entries": view.len(),
                    "lines": view.line_count(),
                    "nodes": view.trie().node_count()
                }),
            )?;
        }

        Commands::List => {
            let view = open_view(&settings, cli.view_file)?;
            let items: Vec<_> = view
                .entries()
                .map(|(subnet, entry)| {
                    serde_json::json!({
                        "subnet": subnet,
                        "area": entry.area,
                        "configured_as": entry.subnet
                    })
                })
                .collect();
            output(
                &format,
                &serde_json::json!({
                    "count": items.len(),
                    "entries": items
                }),
            )?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                output(
                    &format,
                    &serde_json::json!({
                        "path": store.path().display().to_string(),
                        "settings": settings
                    }),
                )?;
            }
            ConfigAction::SetFile { path } => {
                let updated = Settings {
                    view_file: Some(path),
                    ..settings
                };
                store.save(&updated)?;
                output(
                    &format,
                    &serde_json::json!({
                        "status": "ok",
                        "settings": updated
                    }),
                )?;
            }
            ConfigAction::SetFormat { format: new_format } => {
                let updated = Settings {
                    format: Some(new_format),
                    ..settings
                };
                store.save(&updated)?;
                output(
                    &format,
                    &serde_json::json!({
                        "status": "ok",
                        "settings": updated
                    }),
                )?;
            }
        },
    }

    Ok(())
}

fn open_view(settings: &Settings, flag: Option<PathBuf>) -> anyhow::Result<View> {
    let path = settings.resolve_view_file(flag).context(
        "No view file given (use --view-file, NETVIEW_VIEW_FILE or `netview config set-file`)",
    )?;
    let view =
        View::load(&path).with_context(|| format!("Failed to load view {}", path.display()))?;
    Ok(view)
}

fn output(format: &OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value)?);
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
    }
    Ok(())
}
