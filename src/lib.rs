// ==========================================
// 传输监控系统 - 核心库
// ==========================================
// 职责: 节目播出对账，判断各分台节目是否准时、迟播或未播
// 分层: domain → adapter → engine → api
// 红线: engine 层为纯函数，I/O 只出现在 api 网关
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 适配层 - 规范化与后端报文
pub mod adapter;

// 引擎层 - 对账规则
pub mod engine;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 网关与业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DiaSemana, EstadoCelda, EstadoTransmision};

// 领域实体
pub use domain::{CeldaGrid, Filial, Programa, Reporte, ReporteKey, ResultadoTransmision};

// 引擎
pub use engine::{RangoFechas, ReportResolver, Resolucion, ScheduleMatcher, StatusGridBuilder};

// API
pub use api::{ApiError, ApiResult, ControlApi, HttpGateway, MemoryGateway, TransmisionGateway};

// 配置
pub use config::AppConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Control de Transmisiones";
