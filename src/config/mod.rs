use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Identity fields for the signed-in student. CLI flags win over these.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Base URL of the document store / identity service
    pub endpoint: Option<String>,

    #[serde(default)]
    pub user: UserConfig,

    /// Category selector values; defaults to the built-in set when empty
    #[serde(default)]
    pub categories: Vec<String>,
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("STINT_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("stint").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("stint").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "stint", "stint")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("stint"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("stint"));
    }
    directories::ProjectDirs::from("io", "stint", "stint").map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("stint.log"))
}
