use crate::errors::{AppError, AppResult};
use crate::models::RequestStatus;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_file: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_status")]
    pub default_status: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}
fn default_status() -> String {
    "APROVADO".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_path().to_string_lossy().to_string(),
            company_name: String::new(),
            currency_symbol: default_currency_symbol(),
            default_status: default_status(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("extrapay")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".extrapay")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("extrapay.conf")
    }

    /// Return the default path of the requests data file
    pub fn data_file_path() -> PathBuf {
        Self::config_dir().join("requests.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str::<Config>(&content)?
        } else {
            Config::default()
        };

        cfg.data_file = expand_tilde(&cfg.data_file).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Initialize the configuration file and an empty data file.
    ///
    /// In test mode the configuration file is left untouched.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let data_path = match custom_data {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::data_file_path(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = data_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !data_path.exists() {
            fs::write(&data_path, "{\n  \"requests\": [],\n  \"log\": []\n}\n")?;
        }

        Ok(data_path)
    }

    /// Status filter applied by `list` / `export` when none is given.
    pub fn default_status_filter(&self) -> AppResult<Option<RequestStatus>> {
        let s = self.default_status.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        RequestStatus::from_code(s)
            .map(Some)
            .ok_or_else(|| AppError::Config(format!("invalid default_status: {s}")))
    }
}
