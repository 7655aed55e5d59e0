// ==========================================
// 传输监控系统 - 引擎层错误类型
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("日期范围无效: {inicio} 晚于 {fin}")]
    RangoInvalido { inicio: NaiveDate, fin: NaiveDate },
}

pub type EngineResult<T> = Result<T, EngineError>;
