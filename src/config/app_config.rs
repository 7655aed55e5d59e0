// ==========================================
// 传输监控系统 - 应用配置
// ==========================================
// 职责: 配置加载与覆写
// 优先级: 环境变量 > 配置文件 > 默认值
// 文件: <config_dir>/transmisiones/config.json（可选）或显式路径（必须存在）
// ==========================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOCALE: &str = "es";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端基础地址（不含末尾斜杠）
    pub api_url: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
    /// 界面语言（es / en）
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(config_keys::CONFIG_DIR).join(config_keys::CONFIG_FILE))
    }

    /// 从 JSON 文件读取（缺失字段取默认值）
    pub fn from_file(path: &Path) -> Result<Self> {
        let contenido = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&contenido)
            .with_context(|| format!("配置文件格式错误: {}", path.display()))?;
        Ok(config.normalizada())
    }

    /// 加载配置
    ///
    /// # 参数
    /// - path: 显式配置文件路径；None 时尝试默认路径（不存在则跳过）
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(p) => {
                    tracing::debug!(path = %p.display(), "读取默认配置文件");
                    Self::from_file(&p)?
                }
                None => Self::default(),
            },
        };
        Ok(base.con_entorno(|k| std::env::var(k).ok()))
    }

    /// 应用环境变量覆写
    ///
    /// lookup 抽象出来便于测试，不必修改进程环境
    pub fn con_entorno<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(config_keys::ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(valor) = lookup(config_keys::ENV_TIMEOUT_SECS) {
            match valor.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => tracing::warn!(
                    key = config_keys::ENV_TIMEOUT_SECS,
                    valor = %valor,
                    "超时配置无效，保留原值"
                ),
            }
        }
        if let Some(locale) = lookup(config_keys::ENV_LOCALE).filter(|v| !v.trim().is_empty()) {
            self.locale = locale.trim().to_string();
        }
        self.normalizada()
    }

    fn normalizada(mut self) -> Self {
        self.api_url = self.api_url.trim().trim_end_matches('/').to_string();
        if self.timeout_secs == 0 {
            self.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        self
    }
}

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    // 环境变量
    pub const ENV_API_URL: &str = "TRANSMISIONES_API_URL";
    pub const ENV_TIMEOUT_SECS: &str = "TRANSMISIONES_TIMEOUT_SECS";
    pub const ENV_LOCALE: &str = "TRANSMISIONES_LOCALE";

    // 配置文件位置
    pub const CONFIG_DIR: &str = "transmisiones";
    pub const CONFIG_FILE: &str = "config.json";
}
