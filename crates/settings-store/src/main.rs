//! settings-demo: exercises a settings store end to end from the command line.
//!
//! Loads a sample `DemoSettings` record with the chosen policies, optionally
//! applies a change and saves it, then prints the effective settings as JSON.
//!
//! ```text
//! settings-demo --path ./Settings/Settings.json --on-corrupt backup-and-recreate
//! settings-demo --format toml --set-theme dark --save
//! RUST_LOG=debug settings-demo --on-missing fail
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use settings_store::{
    settings_field, Anchor, CorruptFilePolicy, Defaultable, Field, FieldSet, JsonSerializer,
    MissingFilePolicy, Serializer, SettingsStore, StoreOptions, TomlSerializer,
};

/// Sample record managed by the demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DemoSettings {
    theme: String,
    font_size: u32,
    show_status_bar: bool,
    recent_files: Vec<String>,
    /// Stamped by the demo itself; never merged in from disk.
    launch_count: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            font_size: 13,
            show_status_bar: true,
            recent_files: Vec::new(),
            launch_count: 0,
        }
    }
}

impl Defaultable for DemoSettings {}

impl FieldSet for DemoSettings {
    fn fields() -> Vec<Field<Self>> {
        vec![
            settings_field!(DemoSettings, theme),
            settings_field!(DemoSettings, font_size),
            settings_field!(DemoSettings, show_status_bar),
            settings_field!(DemoSettings, recent_files),
            settings_field!(DemoSettings, launch_count, Public, Private),
        ]
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnMissing {
    CreateDefault,
    Fail,
    Skip,
}

impl From<OnMissing> for MissingFilePolicy {
    fn from(value: OnMissing) -> Self {
        match value {
            OnMissing::CreateDefault => MissingFilePolicy::CreateDefault,
            OnMissing::Fail => MissingFilePolicy::Fail,
            OnMissing::Skip => MissingFilePolicy::Skip,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnCorrupt {
    BackupAndRecreate,
    OverwriteWithDefault,
    Fail,
}

impl From<OnCorrupt> for CorruptFilePolicy {
    fn from(value: OnCorrupt) -> Self {
        match value {
            OnCorrupt::BackupAndRecreate => CorruptFilePolicy::BackupAndRecreate,
            OnCorrupt::OverwriteWithDefault => CorruptFilePolicy::OverwriteWithDefault,
            OnCorrupt::Fail => CorruptFilePolicy::Fail,
        }
    }
}

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "settings-demo", about = "Load, repair and save a sample settings file")]
struct Args {
    /// Settings file.  Defaults to Settings/Settings.json next to the binary.
    #[arg(long, env = "SETTINGS_DEMO_PATH")]
    path: Option<PathBuf>,

    /// File format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// What to do when the file is missing.
    #[arg(long, value_enum, default_value_t = OnMissing::CreateDefault)]
    on_missing: OnMissing,

    /// What to do when the file cannot be deserialized.
    #[arg(long, value_enum, default_value_t = OnCorrupt::OverwriteWithDefault)]
    on_corrupt: OnCorrupt,

    /// Log save failures instead of failing.
    #[arg(long)]
    no_throw_on_save: bool,

    /// Change the theme before saving.
    #[arg(long)]
    set_theme: Option<String>,

    /// Save the settings after loading.
    #[arg(long)]
    save: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match args.format {
        Format::Json => run(JsonSerializer, &args),
        Format::Toml => run(TomlSerializer, &args),
    }
}

fn run<S: Serializer<DemoSettings>>(serializer: S, args: &Args) -> anyhow::Result<()> {
    let mut options = StoreOptions {
        on_missing_file: args.on_missing.into(),
        on_failed_deserialization: args.on_corrupt.into(),
        throw_on_failed_save: !args.no_throw_on_save,
        ..StoreOptions::default()
    };
    if let Some(path) = &args.path {
        let (anchor, relative_path) = split_settings_path(path)?;
        options.anchor = anchor;
        options.relative_path = relative_path;
    }

    let mut store: SettingsStore<DemoSettings, S> =
        SettingsStore::with_options(serializer, options)?;

    info!("using settings file {}", store.absolute_path().display());
    store.load()?;
    store.settings_mut().launch_count += 1;

    if let Some(theme) = &args.set_theme {
        store.settings_mut().theme = theme.clone();
    }
    if args.save {
        store.save()?;
        info!("settings saved");
    }

    println!("{}", serde_json::to_string_pretty(store.settings())?);
    Ok(())
}

/// Splits `--path` into the directory it lives in and its file name.  A bare
/// file name is anchored at the working directory.
fn split_settings_path(path: &Path) -> anyhow::Result<(Anchor, PathBuf)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("--path {} does not name a file", path.display()))?;
    let anchor = match path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => Anchor::Directory {
            path: dir.to_path_buf(),
        },
        None => Anchor::WorkingDirectory,
    };
    Ok((anchor, PathBuf::from(file_name)))
}
