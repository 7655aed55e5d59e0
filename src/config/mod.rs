// ==========================================
// 传输监控系统 - 配置层
// ==========================================
// 职责: 后端地址、超时、语言的加载与覆写
// ==========================================

pub mod app_config;

pub use app_config::{config_keys, AppConfig};
