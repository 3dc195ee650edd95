use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys a user may set with `config --set key=value`.
pub const CONFIG_KEYS: [&str; 4] = ["name", "records_dir", "exports_dir", "templates_dir"];

/// One value per recognized key. Empty means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub records_dir: String,
    #[serde(default)]
    pub exports_dir: String,
    #[serde(default)]
    pub templates_dir: String,
}

impl Settings {
    fn get(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "records_dir" => Some(&self.records_dir),
            "exports_dir" => Some(&self.exports_dir),
            "templates_dir" => Some(&self.templates_dir),
            _ => None,
        }
    }

    fn slot(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "name" => Some(&mut self.name),
            "records_dir" => Some(&mut self.records_dir),
            "exports_dir" => Some(&mut self.exports_dir),
            "templates_dir" => Some(&mut self.templates_dir),
            _ => None,
        }
    }
}

/// On-disk layout of the configuration file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    user_defined: Settings,
}

/// Loaded once per invocation and handed to every command by reference.
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    defaults: Settings,
    user_defined: Settings,
}

impl Config {
    /// Return the standard configuration directory (`~/.rtimesheet`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimesheet")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Defaults: empty name, data directories next to the config file.
    pub fn defaults_for(path: &Path) -> Settings {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let data = base.join("data");
        Settings {
            name: String::new(),
            records_dir: data.join("records").to_string_lossy().to_string(),
            exports_dir: data.join("exports").to_string_lossy().to_string(),
            templates_dir: data.join("templates").to_string_lossy().to_string(),
        }
    }

    /// Load configuration from `path` (default location if `None`).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);
        let defaults = Self::defaults_for(&path);

        let file: ConfigFile = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                ConfigFile::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        } else {
            ConfigFile::default()
        };

        let mut cfg = Self {
            path,
            defaults,
            user_defined: Settings::default(),
        };

        // keep only values that actually override a default
        for key in CONFIG_KEYS {
            if let Some(value) = file.user_defined.get(key)
                && !cfg.is_default(key, value)
                && let Some(slot) = cfg.user_defined.slot(key)
            {
                *slot = value.to_string();
            }
        }

        Ok(cfg)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A value counts as unset when empty or equal to the key's default.
    pub fn is_default(&self, key: &str, value: &str) -> bool {
        value.is_empty() || self.defaults.get(key) == Some(value)
    }

    /// Effective value of `key`: user value if set, default otherwise.
    pub fn get(&self, key: &str) -> Option<&str> {
        let user = self.user_defined.get(key)?;
        if self.is_default(key, user) {
            self.defaults.get(key)
        } else {
            Some(user)
        }
    }

    pub fn name(&self) -> &str {
        self.get("name").unwrap_or_default()
    }

    pub fn records_dir(&self) -> PathBuf {
        expand_tilde(self.get("records_dir").unwrap_or_default())
    }

    pub fn exports_dir(&self) -> PathBuf {
        expand_tilde(self.get("exports_dir").unwrap_or_default())
    }

    pub fn templates_dir(&self) -> PathBuf {
        expand_tilde(self.get("templates_dir").unwrap_or_default())
    }

    /// Set a user-defined key in memory. Call [`Config::save`] to persist.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let slot = self
            .user_defined
            .slot(key)
            .ok_or_else(|| AppError::ConfigKeyInvalid(key.to_string()))?;
        *slot = value.to_string();
        Ok(())
    }

    /// Parse and apply a `key=value` pair (whitespace around both is trimmed).
    pub fn set_pair(&mut self, pair: &str) -> AppResult<(String, String)> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| AppError::Config(format!("expected key=value, got '{}'", pair)))?;
        let (key, value) = (key.trim(), value.trim());
        self.set(key, value)?;
        Ok((key.to_string(), value.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let file = ConfigFile {
            user_defined: self.user_defined.clone(),
        };
        fs::write(&self.path, serde_yaml::to_string(&file)?)?;
        Ok(())
    }

    /// `[DEFAULT]` and `[user_defined]` sections, one `key = value` per line.
    /// Keys left at their default show as `key =` under `[user_defined]`.
    pub fn list(&self) -> Vec<String> {
        let mut lines = vec!["[DEFAULT]".to_string()];
        for key in CONFIG_KEYS {
            lines.push(format_entry(key, self.defaults.get(key).unwrap_or_default()));
        }

        lines.push("[user_defined]".to_string());
        for key in CONFIG_KEYS {
            let value = self.user_defined.get(key).unwrap_or_default();
            if self.is_default(key, value) {
                lines.push(format!("{} =", key));
            } else {
                lines.push(format_entry(key, value));
            }
        }
        lines
    }
}

fn format_entry(key: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{} =", key)
    } else {
        format!("{} = {}", key, value)
    }
}
