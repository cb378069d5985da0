//! Application settings: where the database and transfer files live.
//!
//! The settings file is `~/.config/cinedex/settings.toml`:
//!
//! ```toml
//! [store]
//! db_path = "movies.db"
//!
//! [transfer]
//! import_path = "movies.json"
//! export_path = "exported.json"
//! ```
//!
//! Each path resolves with the priority CLI flag > environment variable >
//! settings file > built-in default.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DB_ENV: &str = "CINEDEX_DB";
pub const IMPORT_ENV: &str = "CINEDEX_IMPORT";
pub const EXPORT_ENV: &str = "CINEDEX_EXPORT";

pub const DEFAULT_DB_PATH: &str = "movies.db";
pub const DEFAULT_IMPORT_PATH: &str = "movies.json";
pub const DEFAULT_EXPORT_PATH: &str = "exported.json";

/// Canonical path to the settings file: `~/.config/cinedex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("cinedex").join("settings.toml")
}

/// TOML settings file format.
#[derive(Debug, Default, Deserialize, Serialize)]
struct SettingsFile {
    store: Option<StoreSection>,
    transfer: Option<TransferSection>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct StoreSection {
    db_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct TransferSection {
    import_path: Option<PathBuf>,
    export_path: Option<PathBuf>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Given on the command line.
    CliFlag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the settings file.
    ConfigFile,
    /// Built-in default.
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CliFlag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved path together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub source: SettingSource,
}

/// Paths given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub db: Option<PathBuf>,
    pub import: Option<PathBuf>,
    pub export: Option<PathBuf>,
}

/// Fully resolved settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub db_path: ResolvedPath,
    pub import_path: ResolvedPath,
    pub export_path: ResolvedPath,
}

impl Settings {
    /// Resolve every path from the command line, environment, and settings file.
    pub fn resolve(overrides: &PathOverrides) -> Self {
        let file = load_settings_file(&settings_path());
        Self::resolve_with(overrides, file.as_ref(), |var| std::env::var(var).ok())
    }

    fn resolve_with(
        overrides: &PathOverrides,
        file: Option<&SettingsFile>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let store = file.and_then(|f| f.store.as_ref());
        let transfer = file.and_then(|f| f.transfer.as_ref());

        Self {
            db_path: pick(
                overrides.db.clone(),
                DB_ENV,
                &env,
                store.and_then(|s| s.db_path.clone()),
                DEFAULT_DB_PATH,
            ),
            import_path: pick(
                overrides.import.clone(),
                IMPORT_ENV,
                &env,
                transfer.and_then(|t| t.import_path.clone()),
                DEFAULT_IMPORT_PATH,
            ),
            export_path: pick(
                overrides.export.clone(),
                EXPORT_ENV,
                &env,
                transfer.and_then(|t| t.export_path.clone()),
                DEFAULT_EXPORT_PATH,
            ),
        }
    }
}

fn pick(
    flag: Option<PathBuf>,
    var: &'static str,
    env: &impl Fn(&str) -> Option<String>,
    from_file: Option<PathBuf>,
    default: &str,
) -> ResolvedPath {
    if let Some(path) = flag {
        return ResolvedPath {
            path,
            source: SettingSource::CliFlag,
        };
    }
    if let Some(value) = env(var).filter(|v| !v.is_empty()) {
        return ResolvedPath {
            path: PathBuf::from(value),
            source: SettingSource::EnvVar(var),
        };
    }
    if let Some(path) = from_file.filter(|p| !p.as_os_str().is_empty()) {
        return ResolvedPath {
            path,
            source: SettingSource::ConfigFile,
        };
    }
    ResolvedPath {
        path: PathBuf::from(default),
        source: SettingSource::Default,
    }
}

/// Read and parse the settings file. A missing or malformed file yields `None`.
fn load_settings_file(path: &Path) -> Option<SettingsFile> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&contents) {
        Ok(file) => Some(file),
        Err(e) => {
            log::warn!("Ignoring malformed settings file {}: {}", path.display(), e);
            None
        }
    }
}

/// Save (or clear) the database path in `settings.toml`.
pub fn save_db_path(path: Option<&Path>) -> io::Result<()> {
    save_db_path_to(&settings_path(), path)
}

/// Update `store.db_path` in the given settings file.
///
/// Uses `toml::Value` for a surgical update so other keys are preserved.
fn save_db_path_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [store] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let store = table
        .entry("store")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let store_table = store
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[store] is not a table"))?;

    match path {
        Some(p) => {
            store_table.insert(
                "db_path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            store_table.remove("db_path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
