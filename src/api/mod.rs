// ==========================================
// 传输监控系统 - API 层
// ==========================================
// 职责: 后端网关、填报校验、业务编排、导出
// ==========================================

pub mod control_api;
pub mod error;
pub mod export;
pub mod gateway;
pub mod http_gateway;
pub mod memory_gateway;
pub mod validator;

// 重导出核心类型
pub use control_api::{ControlApi, GridFilial};
pub use error::{ApiError, ApiResult};
pub use export::{grid_to_csv, write_grid_csv};
pub use gateway::TransmisionGateway;
pub use http_gateway::HttpGateway;
pub use memory_gateway::MemoryGateway;
pub use validator::{EnvioReporte, ReportSubmissionValidator};
