use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Default user when neither `--user` nor `BABYLOG_USER` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// When set, diagnostics go to `<log_dir>/babylog.log` instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
    #[serde(default = "default_demo_min")]
    pub demo_min_per_day: u32,
    #[serde(default = "default_demo_max")]
    pub demo_max_per_day: u32,
    #[serde(default = "default_demo_ratio")]
    pub demo_urination_ratio: f64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_demo_min() -> u32 {
    3
}
fn default_demo_max() -> u32 {
    8
}
fn default_demo_ratio() -> f64 {
    0.7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            user: None,
            log_dir: None,
            demo_min_per_day: default_demo_min(),
            demo_max_per_day: default_demo_max(),
            demo_urination_ratio: default_demo_ratio(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.babylog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".babylog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("babylog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("babylog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.demo_min_per_day > self.demo_max_per_day {
            return Err(AppError::Config(format!(
                "demo_min_per_day ({}) is greater than demo_max_per_day ({})",
                self.demo_min_per_day, self.demo_max_per_day
            )));
        }
        if !(0.0..=1.0).contains(&self.demo_urination_ratio) {
            return Err(AppError::Config(format!(
                "demo_urination_ratio must be between 0 and 1, got {}",
                self.demo_urination_ratio
            )));
        }
        Ok(())
    }

    /// Where a `--db` value points: absolute paths as given, relative ones
    /// under the config directory.
    pub fn resolve_db_path(custom_db: &str) -> PathBuf {
        resolve_db_path_in(&Self::config_dir(), custom_db)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => resolve_db_path_in(&dir, &name),
            None => Self::database_file(),
        };

        // Keep an existing config (and its user / demo settings), just repoint the DB
        let mut config = Self::load()?;
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(db_path)
    }
}

fn resolve_db_path_in(dir: &Path, custom_db: &str) -> PathBuf {
    let p = Path::new(custom_db);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        dir.join(p)
    }
}
