use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8080

[cors]
allowed_origins = ["http://localhost:3030"]

[app]
# Directory the templates directory is resolved against. Defaults to the
# directory holding the server executable.
# root = "/srv/resume-extractor"
templates_dir = "templates"

[upload]
# Largest accepted upload, in bytes
max_upload_bytes = 104857600

[pipeline]
# Largest decompressed archive entry, in bytes
max_entry_bytes = 52428800

[storage]
persist_records = true
# database_path = "/path/to/resumes.db"
"#;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: Option<ServerConfig>,
    pub cors: Option<CorsConfig>,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub pipeline: PipelineSettings,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: Some(ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            }),
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3030".to_string()],
            }),
            app: AppConfig::default(),
            upload: UploadConfig::default(),
            pipeline: PipelineSettings::default(),
            storage: StorageConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub root: Option<PathBuf>,
    pub templates_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: None,
            templates_dir: PathBuf::from("templates"),
        }
    }
}

impl AppConfig {
    /// Templates directory; relative paths are taken from `root`, or from
    /// [`application_root`] when no root is configured.
    pub fn templates_path(&self) -> PathBuf {
        match &self.root {
            Some(root) => root.join(&self.templates_dir),
            None => application_root(&self.templates_dir).join(&self.templates_dir),
        }
    }
}

/// Directory of the running executable, independent of the working
/// directory. Falls back to the crate directory when `templates_dir` is not
/// installed next to the executable, as under `cargo run`.
pub fn application_root(templates_dir: &Path) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    match exe_dir {
        Some(dir) if dir.join(templates_dir).is_dir() => dir,
        _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")),
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadConfig {
    pub max_upload_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 100 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PipelineSettings {
    pub max_entry_bytes: u64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_entry_bytes: extractors::DEFAULT_MAX_ENTRY_BYTES,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    pub persist_records: bool,
    pub database_path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist_records: true,
            database_path: None,
        }
    }
}

impl ApiConfig {
    /// Load the config file, writing a commented default first if it is
    /// missing. `RESUME__SECTION__KEY` environment variables take precedence
    /// over the file.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = path.unwrap_or_else(get_config_path);

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
            }
        }

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config = Self::from_file(&config_path, true)?;

        Ok((config, config_path))
    }

    fn from_file(config_path: &Path, with_env: bool) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(File::from(config_path.to_path_buf()));

        if with_env {
            builder = builder.add_source(
                Environment::with_prefix("RESUME")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        builder.build()?.try_deserialize()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("resume-extractor").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
