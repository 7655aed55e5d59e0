// ==========================================
// 传输监控系统 - API层错误类型
// ==========================================
// 职责: 汇总适配层/引擎层/网关错误，转换为用户可读的错误消息
// ==========================================

use crate::adapter::error::AdapterError;
use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    /// 如: 不播出的日期不能填报
    #[error("无效的状态转换: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    // ==========================================
    // 后端网关错误
    // ==========================================
    #[error("后端请求失败: {0}")]
    GatewayError(String),

    #[error("后端返回异常状态: status={status}, url={url}")]
    HttpStatus { status: u16, url: String },

    // ==========================================
    // 配置与导出
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 AdapterError 转换
// ==========================================
impl From<AdapterError> for ApiError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::MissingField(field) => {
                ApiError::ValidationError(format!("缺少字段: {}", field))
            }
            other => ApiError::InvalidInput(other.to_string()),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match (err.status(), err.url()) {
            (Some(status), Some(url)) => ApiError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            },
            _ => ApiError::GatewayError(err.to_string()),
        }
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
