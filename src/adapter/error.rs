// ==========================================
// 传输监控系统 - 适配层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 后端数据适配错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("无法识别的星期: {0}")]
    UnknownDay(String),

    #[error("时间格式错误 (期望 HH:MM): {0}")]
    TimeParse(String),

    #[error("时间超出范围: {hour}:{minute}")]
    TimeOutOfRange { hour: u32, minute: u32 },

    #[error("日期格式错误 (期望 YYYY-MM-DD 或 DD/MM/YYYY): {0}")]
    DateParse(String),

    #[error("字段缺失: {0}")]
    MissingField(String),
}

/// Result 类型别名
pub type AdapterResult<T> = Result<T, AdapterError>;
