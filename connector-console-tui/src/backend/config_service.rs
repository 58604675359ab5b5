//! 配置服务
//!
//! 配置以 JSON 形式保存在 `<config_dir>/connector-console/config.json`。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use connector_console_core::CoreError;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖每页条数的环境变量
pub const PAGE_SIZE_ENV: &str = "CONNECTOR_CONSOLE_PAGE_SIZE";

/// 每页条数上限
pub const MAX_PAGE_SIZE: u32 = 100;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub language: String,
    pub theme: Theme,
    pub page_size: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            theme: Theme::Dark,
            page_size: 10,
        }
    }
}

impl ConsoleConfig {
    /// 将每页条数限制在 `1..=MAX_PAGE_SIZE`
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// 应用环境变量中的每页条数（无法解析时忽略）
    #[must_use]
    pub fn with_page_size_override(mut self, value: Option<&str>) -> Self {
        if let Some(raw) = value {
            match raw.trim().parse::<u32>() {
                Ok(size) => self.page_size = size,
                Err(_) => log::warn!("Ignoring invalid {PAGE_SIZE_ENV}={raw}"),
            }
        }
        self.normalized()
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<ConsoleConfig>;

    /// 保存配置
    fn save(&self, config: &ConsoleConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    dir: PathBuf,
}

impl LocalConfigService {
    /// 使用系统配置目录
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("connector-console");
        Self::with_dir(dir)
    }

    /// 使用指定目录
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join("config.json")
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join("connector-console.log")
    }

    fn read_file(path: &Path) -> Result<ConsoleConfig, CoreError> {
        let content =
            fs::read_to_string(path).map_err(|e| CoreError::StorageError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| CoreError::SerializationError(e.to_string()))
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<ConsoleConfig> {
        let path = self.config_path();
        let config = if path.exists() {
            Self::read_file(&path)?
        } else {
            log::info!("No config at {}, using defaults", path.display());
            ConsoleConfig::default()
        };

        let env_value = std::env::var(PAGE_SIZE_ENV).ok();
        Ok(config.with_page_size_override(env_value.as_deref()))
    }

    fn save(&self, config: &ConsoleConfig) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        fs::write(self.config_path(), content)
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        log::info!("Config saved to {}", self.config_path().display());
        Ok(())
    }
}
