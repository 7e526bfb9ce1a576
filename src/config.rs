use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 上传文件默认上限 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub upload: UploadConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

/// 文本提取后端, 启动时选定一次
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub backend: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/invoice_reconcile".to_string(),
                max_connections: 20,
            },
            upload: UploadConfig {
                max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            extraction: ExtractionConfig {
                backend: "pdf".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> config/reconcile.toml (可选) -> RECONCILE__* 环境变量
    /// `DATABASE_URL` 优先级最高
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port as i64)?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", defaults.database.max_connections as i64)?
            .set_default("upload.max_bytes", defaults.upload.max_bytes as i64)?
            .set_default("extraction.backend", defaults.extraction.backend)?
            .add_source(File::with_name("config/reconcile").required(false))
            .add_source(Environment::with_prefix("RECONCILE").separator("__").try_parsing(true))
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
    }
}
