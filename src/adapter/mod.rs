// ==========================================
// 传输监控系统 - 适配层
// ==========================================
// 职责: 星期/时间/原因代码/日期的规范化，后端报文转换
// 红线: 引擎层只接触规范化后的值
// ==========================================

pub mod date_format;
pub mod day_name;
pub mod error;
pub mod target_mapper;
pub mod time_codec;
pub mod wire;

pub use day_name::{normalize_day_name, DiasSemanaWire};
pub use error::{AdapterError, AdapterResult};
pub use target_mapper::{to_backend, to_frontend, TargetCode};
pub use time_codec::{hora_to_string, parse_hora, string_to_hora, HoraBackend, HoraWire};
