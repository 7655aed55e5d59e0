// ==========================================
// 传输监控系统 - 状态网格构建
// ==========================================
// 职责: 稀疏报告 + 完整 (节目 × 日期) 网格 → 每格状态
// 红线: 不播出的格子不查报告；无报告的播出格子为 Pendiente
// ==========================================

use crate::domain::filial::Filial;
use crate::domain::grid::CeldaGrid;
use crate::domain::programa::Programa;
use crate::domain::reporte::{Reporte, ReporteKey};
use crate::domain::types::{DiaSemana, EstadoCelda};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::report_resolver::{ReportResolver, Resolucion};
use crate::engine::schedule_matcher::ScheduleMatcher;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

// ==========================================
// RangoFechas - 闭区间 [inicio, fin]
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangoFechas {
    inicio: NaiveDate,
    fin: NaiveDate,
}

impl RangoFechas {
    /// # 返回
    /// - Err(RangoInvalido): inicio 晚于 fin
    pub fn new(inicio: NaiveDate, fin: NaiveDate) -> EngineResult<Self> {
        if inicio > fin {
            return Err(EngineError::RangoInvalido { inicio, fin });
        }
        Ok(Self { inicio, fin })
    }

    /// 包含该日期的周（周一至周日）
    pub fn semana_de(fecha: NaiveDate) -> Self {
        let inicio = fecha - Duration::days(fecha.weekday().num_days_from_monday() as i64);
        Self {
            inicio,
            fin: inicio + Duration::days(6),
        }
    }

    pub fn inicio(&self) -> NaiveDate {
        self.inicio
    }

    pub fn fin(&self) -> NaiveDate {
        self.fin
    }

    /// 区间天数（含两端）
    pub fn dias(&self) -> usize {
        (self.fin - self.inicio).num_days() as usize + 1
    }

    pub fn contiene(&self, fecha: NaiveDate) -> bool {
        self.inicio <= fecha && fecha <= self.fin
    }

    /// 逐日迭代
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        self.inicio.iter_days().take(self.dias())
    }
}

pub struct StatusGridBuilder;

impl StatusGridBuilder {
    /// 构建单个格子
    pub fn celda(programa: &Programa, reportes: &[Reporte], filial_id: i64, fecha: NaiveDate) -> CeldaGrid {
        let mut celda = CeldaGrid {
            filial_id,
            programa_id: programa.id,
            fecha,
            dia: DiaSemana::de_fecha(fecha),
            estado: EstadoCelda::NoProgramado,
            hora_programa: programa.hora_inicio.clone(),
            resultado: None,
            reporte_id: None,
            duplicados: 0,
        };

        if !ScheduleMatcher::is_scheduled(programa, fecha) {
            return celda;
        }

        let key = ReporteKey::new(filial_id, programa.id, fecha);
        let resolucion = ReportResolver::find_report(reportes, &key);
        celda.duplicados = resolucion.coincidencias();
        match resolucion.reporte() {
            Some(reporte) => {
                celda.estado = EstadoCelda::from(reporte.estado());
                celda.resultado = Some(reporte.resultado.clone());
                celda.reporte_id = reporte.id;
            }
            None => celda.estado = EstadoCelda::Pendiente,
        }
        celda
    }

    /// 构建分台在日期区间内的状态网格
    ///
    /// # 参数
    /// - filial: 分台
    /// - programas: 全部节目（内部按关联关系过滤）
    /// - reportes: 稀疏报告列表
    /// - rango: 日期区间
    ///
    /// # 返回
    /// - 节目优先、日期其次的格子列表，顺序与输入一致
    pub fn build_grid(
        filial: &Filial,
        programas: &[Programa],
        reportes: &[Reporte],
        rango: &RangoFechas,
    ) -> Vec<CeldaGrid> {
        let asociados = ScheduleMatcher::programas_de_filial(filial, programas);
        let mut celdas = Vec::with_capacity(asociados.len() * rango.dias());

        for programa in asociados {
            for fecha in rango.iter() {
                celdas.push(Self::celda(programa, reportes, filial.id, fecha));
            }
        }

        tracing::debug!(
            filial_id = filial.id,
            inicio = %rango.inicio(),
            fin = %rango.fin(),
            celdas = celdas.len(),
            "状态网格构建完成"
        );
        celdas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reporte::ResultadoTransmision;

    fn fecha(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rango_rejects_inverted_bounds() {
        assert_eq!(
            RangoFechas::new(fecha(2024, 1, 7), fecha(2024, 1, 1)),
            Err(EngineError::RangoInvalido {
                inicio: fecha(2024, 1, 7),
                fin: fecha(2024, 1, 1),
            })
        );
        let un_dia = RangoFechas::new(fecha(2024, 1, 1), fecha(2024, 1, 1)).unwrap();
        assert_eq!(un_dia.dias(), 1);
        assert_eq!(un_dia.iter().collect::<Vec<_>>(), vec![fecha(2024, 1, 1)]);
    }

    #[test]
    fn test_semana_de_starts_monday() {
        let semana = RangoFechas::semana_de(fecha(2024, 1, 4));
        assert_eq!(semana.inicio(), fecha(2024, 1, 1));
        assert_eq!(semana.fin(), fecha(2024, 1, 7));

        // 周日归属前一个周一开始的周
        let domingo = RangoFechas::semana_de(fecha(2024, 3, 3));
        assert_eq!(domingo.inicio(), fecha(2024, 2, 26));
        assert!(domingo.contiene(fecha(2024, 2, 29)));
    }

    #[test]
    fn test_unassociated_programs_are_excluded() {
        let filial = Filial::new(1, "Central");
        let programas = vec![
            Programa::new(10, "Noticiero", "08:00")
                .con_dias(&DiaSemana::LABORALES)
                .con_filiales(&[1]),
            Programa::new(11, "Deportes", "09:00")
                .con_dias(&DiaSemana::LABORALES)
                .con_filiales(&[2]),
        ];
        let rango = RangoFechas::semana_de(fecha(2024, 1, 1));
        let grid = StatusGridBuilder::build_grid(&filial, &programas, &[], &rango);
        assert_eq!(grid.len(), 7);
        assert!(grid.iter().all(|c| c.programa_id == 10));
    }

    #[test]
    fn test_unscheduled_cell_ignores_report() {
        let programa = Programa::new(10, "Noticiero", "08:00").con_dias(&[DiaSemana::Lunes]);
        // 周二的报告不会让周二变成已播出
        let reportes = vec![Reporte::new(
            1,
            10,
            fecha(2024, 1, 2),
            ResultadoTransmision::Si { hora_real: None },
        )];
        let celda = StatusGridBuilder::celda(&programa, &reportes, 1, fecha(2024, 1, 2));
        assert_eq!(celda.estado, EstadoCelda::NoProgramado);
        assert!(celda.resultado.is_none());
        assert_eq!(celda.duplicados, 0);
    }
}
