// ==========================================
// 传输监控系统 - 网格汇总
// ==========================================
// 职责: 按状态计数、准时率、按日视图
// 输入: StatusGridBuilder 产出的格子
// ==========================================

use crate::domain::grid::CeldaGrid;
use crate::domain::types::{DiaSemana, EstadoCelda};
use crate::engine::status_grid::RangoFechas;
use chrono::NaiveDate;
use serde::Serialize;

/// 状态计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConteoEstados {
    pub no_programados: usize,
    pub pendientes: usize,
    pub si: usize,
    pub no: usize,
    pub tarde: usize,
    /// 存在重复报告的格子
    pub ambiguos: usize,
}

impl ConteoEstados {
    pub fn desde<'a>(celdas: impl IntoIterator<Item = &'a CeldaGrid>) -> Self {
        let mut conteo = Self::default();
        for celda in celdas {
            match celda.estado {
                EstadoCelda::NoProgramado => conteo.no_programados += 1,
                EstadoCelda::Pendiente => conteo.pendientes += 1,
                EstadoCelda::Si => conteo.si += 1,
                EstadoCelda::No => conteo.no += 1,
                EstadoCelda::Tarde => conteo.tarde += 1,
            }
            if celda.es_ambiguo() {
                conteo.ambiguos += 1;
            }
        }
        conteo
    }

    /// 某状态的格子数
    pub fn cantidad(&self, estado: EstadoCelda) -> usize {
        match estado {
            EstadoCelda::NoProgramado => self.no_programados,
            EstadoCelda::Pendiente => self.pendientes,
            EstadoCelda::Si => self.si,
            EstadoCelda::No => self.no,
            EstadoCelda::Tarde => self.tarde,
        }
    }

    /// 已排期格子数
    pub fn programados(&self) -> usize {
        self.pendientes + self.si + self.no + self.tarde
    }

    /// 已填报格子数
    pub fn reportados(&self) -> usize {
        self.si + self.no + self.tarde
    }

    /// 准时率 = si / 已填报；无填报时为 None
    pub fn tasa_puntualidad(&self) -> Option<f64> {
        match self.reportados() {
            0 => None,
            n => Some(self.si as f64 / n as f64),
        }
    }
}

/// 单日视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenDia {
    pub fecha: NaiveDate,
    pub dia: DiaSemana,
    pub conteo: ConteoEstados,
    pub celdas: Vec<CeldaGrid>,
}

/// 周（或任意区间）汇总
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenSemanal {
    pub filial_id: i64,
    pub rango: RangoFechas,
    pub conteo: ConteoEstados,
    pub tasa_puntualidad: Option<f64>,
    pub dias: Vec<ResumenDia>,
}

pub struct SummaryBuilder;

impl SummaryBuilder {
    /// 某日的全部格子（保持网格顺序）
    pub fn celdas_de_fecha(grid: &[CeldaGrid], fecha: NaiveDate) -> Vec<CeldaGrid> {
        grid.iter().filter(|c| c.fecha == fecha).cloned().collect()
    }

    pub fn resumen_dia(grid: &[CeldaGrid], fecha: NaiveDate) -> ResumenDia {
        let celdas = Self::celdas_de_fecha(grid, fecha);
        ResumenDia {
            fecha,
            dia: DiaSemana::de_fecha(fecha),
            conteo: ConteoEstados::desde(&celdas),
            celdas,
        }
    }

    /// 汇总区间内的网格（区间外的格子忽略）
    pub fn resumen(filial_id: i64, grid: &[CeldaGrid], rango: &RangoFechas) -> ResumenSemanal {
        let conteo = ConteoEstados::desde(grid.iter().filter(|c| rango.contiene(c.fecha)));
        ResumenSemanal {
            filial_id,
            rango: *rango,
            conteo,
            tasa_puntualidad: conteo.tasa_puntualidad(),
            dias: rango.iter().map(|f| Self::resumen_dia(grid, f)).collect(),
        }
    }
}
