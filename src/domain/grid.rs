// ==========================================
// 传输监控系统 - 状态网格模型（派生，不持久化）
// ==========================================

use crate::domain::reporte::ResultadoTransmision;
use crate::domain::types::{DiaSemana, EstadoCelda};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// CeldaGrid - (分台, 节目, 日期) 格子
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeldaGrid {
    pub filial_id: i64,
    pub programa_id: i64,
    pub fecha: NaiveDate,
    pub dia: DiaSemana,
    pub estado: EstadoCelda,

    /// 节目计划开播时间
    pub hora_programa: String,

    /// 报告内容（NoProgramado / 无报告时为 None）
    pub resultado: Option<ResultadoTransmision>,
    pub reporte_id: Option<i64>,

    /// 同键重复报告的条数（>1 表示数据异常）
    #[serde(default)]
    pub duplicados: usize,
}

impl CeldaGrid {
    pub fn es_programado(&self) -> bool {
        self.estado.es_programado()
    }

    pub fn target(&self) -> Option<&str> {
        self.resultado.as_ref().and_then(|r| r.target())
    }

    pub fn motivo(&self) -> Option<&str> {
        self.resultado.as_ref().and_then(|r| r.motivo())
    }

    pub fn hora_real(&self) -> Option<&str> {
        self.resultado.as_ref().and_then(|r| r.hora_real())
    }

    pub fn es_ambiguo(&self) -> bool {
        self.duplicados > 1
    }
}
