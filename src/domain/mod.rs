// ==========================================
// 传输监控系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含 I/O，不含引擎逻辑
// ==========================================

pub mod filial;
pub mod grid;
pub mod programa;
pub mod reporte;
pub mod types;

// 重导出核心类型
pub use filial::{Filial, FilialInput};
pub use grid::CeldaGrid;
pub use programa::{Programa, ProgramaInput};
pub use reporte::{Reporte, ReporteKey, ResultadoTransmision};
pub use types::{DiaSemana, EstadoCelda, EstadoTransmision};
