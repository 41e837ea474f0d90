use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftDefaults;
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_start_time")]
    pub default_start_time: String,
    #[serde(default = "default_end_time")]
    pub default_end_time: String,
    #[serde(default = "default_max_warnings")]
    pub max_warnings_shown: usize,
}

fn default_start_time() -> String {
    "08:00".to_string()
}
fn default_end_time() -> String {
    "17:00".to_string()
}
fn default_max_warnings() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_start_time: default_start_time(),
            default_end_time: default_end_time(),
            max_warnings_shown: default_max_warnings(),
        }
    }
}

impl Config {
    /// `%APPDATA%/rworktime` on Windows, `~/.rworktime` elsewhere.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworktime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworktime")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworktime.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworktime.sqlite")
    }

    /// Read the config file; defaults when there is none.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Shift defaults, validated.
    pub fn shift_defaults(&self) -> AppResult<ShiftDefaults> {
        ShiftDefaults::from_strs(&self.default_start_time, &self.default_end_time).map_err(|e| {
            AppError::Config(format!("invalid default shift times: {e}"))
        })
    }

    /// Update the default shift times (HH:MM). Either side may be left as is.
    pub fn set_shift_defaults(&mut self, start: Option<&str>, end: Option<&str>) -> AppResult<()> {
        if let Some(s) = start {
            let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            self.default_start_time = t.format("%H:%M").to_string();
        }
        if let Some(e) = end {
            let t = parse_time(e).ok_or_else(|| AppError::InvalidTime(e.to_string()))?;
            self.default_end_time = t.format("%H:%M").to_string();
        }
        Ok(())
    }

    /// Prepare the config directory, the config file (unless `is_test`)
    /// and an empty database file. A relative `custom_db` lives in the
    /// config directory.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db.map(PathBuf::from) {
            Some(p) if p.is_absolute() => p,
            Some(p) => dir.join(p),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().into_owned(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}
