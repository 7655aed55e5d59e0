// ==========================================
// 传输监控系统 - 引擎层
// ==========================================
// 职责: 排期匹配、报告解析、状态网格、汇总
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

pub mod error;
pub mod report_resolver;
pub mod schedule_matcher;
pub mod status_grid;
pub mod status_style;
pub mod summary;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use report_resolver::{ReportResolver, Resolucion};
pub use schedule_matcher::ScheduleMatcher;
pub use status_grid::{RangoFechas, StatusGridBuilder};
pub use status_style::{EstiloEstado, StatusStyle};
pub use summary::{ConteoEstados, ResumenDia, ResumenSemanal, SummaryBuilder};
