use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use server_api::WatchLinks;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "server.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub doc_root: PathBuf,
    pub data_path: PathBuf,
    pub max_upcoming: Option<usize>,
    pub watch_links: WatchLinks,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            doc_root: "./public".into(),
            data_path: "./data.json".into(),
            max_upcoming: None,
            watch_links: WatchLinks::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    doc_root: Option<PathBuf>,
    data_path: Option<PathBuf>,
    max_upcoming: Option<usize>,
    watch_links: Option<WatchLinks>,
}

/// Defaults, then `server.toml` (or `APP__CONFIG`), then `APP__*` variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    let config_path =
        std::env::var("APP__CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let raw = read_optional(Path::new(&config_path))?;
    settings_from_sources(raw.as_deref(), |key| std::env::var(key).ok())
        .with_context(|| format!("invalid configuration in '{config_path}'"))
}

pub fn settings_from_sources(
    raw_file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = raw_file {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.bind_addr {
            settings.bind_addr = v;
        }
        if let Some(v) = file_cfg.doc_root {
            settings.doc_root = v;
        }
        if let Some(v) = file_cfg.data_path {
            settings.data_path = v;
        }
        if let Some(v) = file_cfg.max_upcoming {
            settings.max_upcoming = Some(v);
        }
        if let Some(v) = file_cfg.watch_links {
            settings.watch_links = v;
        }
    }

    if let Some(v) = env("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("APP__DOC_ROOT") {
        settings.doc_root = v.into();
    }
    if let Some(v) = env("APP__DATA_PATH") {
        settings.data_path = v.into();
    }
    if let Some(v) = env("APP__MAX_UPCOMING") {
        match v.trim() {
            "" | "unlimited" => settings.max_upcoming = None,
            raw => match raw.parse::<usize>() {
                Ok(parsed) => settings.max_upcoming = Some(parsed),
                Err(error) => warn!(value = %raw, %error, "ignoring APP__MAX_UPCOMING"),
            },
        }
    }

    Ok(settings)
}

fn read_optional(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => {
            Err(error).with_context(|| format!("failed to read config '{}'", path.display()))
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
