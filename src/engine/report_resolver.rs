// ==========================================
// 传输监控系统 - 报告解析
// ==========================================
// 职责: 按 (分台, 节目, 日期) 精确查找报告
// 红线: 无报告 → Pendiente；重复报告不得静默丢弃
// ==========================================

use crate::domain::reporte::{Reporte, ReporteKey};
use std::cmp::Ordering;

/// 查找结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolucion<'a> {
    /// 唯一匹配
    Encontrado(&'a Reporte),
    /// 无匹配
    Pendiente,
    /// 同键多条，`elegido` 为最近更新的一条
    Ambiguo {
        elegido: &'a Reporte,
        duplicados: usize,
    },
}

impl<'a> Resolucion<'a> {
    /// 采用的报告（Pendiente 时为 None）
    pub fn reporte(&self) -> Option<&'a Reporte> {
        match self {
            Resolucion::Encontrado(r) => Some(r),
            Resolucion::Ambiguo { elegido, .. } => Some(elegido),
            Resolucion::Pendiente => None,
        }
    }

    /// 匹配条数
    pub fn coincidencias(&self) -> usize {
        match self {
            Resolucion::Encontrado(_) => 1,
            Resolucion::Ambiguo { duplicados, .. } => *duplicados,
            Resolucion::Pendiente => 0,
        }
    }
}

pub struct ReportResolver;

impl ReportResolver {
    /// 查找 (filial_id, programa_id, fecha) 对应的报告
    ///
    /// # 规则
    /// - 三个字段精确相等才算匹配
    /// - 多条匹配: updated_at 最新者优先（缺失视为最旧），其次 id 较大者，
    ///   再次列表中靠后者
    pub fn find_report<'a>(reportes: &'a [Reporte], key: &ReporteKey) -> Resolucion<'a> {
        let mut elegido: Option<&'a Reporte> = None;
        let mut duplicados = 0usize;

        for reporte in reportes.iter().filter(|r| r.coincide(key)) {
            duplicados += 1;
            elegido = match elegido {
                Some(actual) if Self::comparar_recencia(reporte, actual) == Ordering::Less => {
                    Some(actual)
                }
                _ => Some(reporte),
            };
        }

        match (elegido, duplicados) {
            (None, _) => Resolucion::Pendiente,
            (Some(r), 1) => Resolucion::Encontrado(r),
            (Some(r), n) => {
                tracing::warn!(
                    filial_id = key.filial_id,
                    programa_id = key.programa_id,
                    fecha = %key.fecha,
                    duplicados = n,
                    elegido = ?r.id,
                    "同一格子存在多条报告，采用最近更新的一条"
                );
                Resolucion::Ambiguo {
                    elegido: r,
                    duplicados: n,
                }
            }
        }
    }

    /// 以三个字段查找（便捷入口）
    pub fn find<'a>(
        reportes: &'a [Reporte],
        filial_id: i64,
        programa_id: i64,
        fecha: chrono::NaiveDate,
    ) -> Resolucion<'a> {
        Self::find_report(reportes, &ReporteKey::new(filial_id, programa_id, fecha))
    }

    // Option 的排序中 None < Some，正好让缺失时间戳的报告排在最后
    fn comparar_recencia(a: &Reporte, b: &Reporte) -> Ordering {
        a.updated_at
            .cmp(&b.updated_at)
            .then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reporte::ResultadoTransmision;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn fecha(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn si(filial: i64, programa: i64, dia: u32) -> Reporte {
        Reporte::new(
            filial,
            programa,
            fecha(dia),
            ResultadoTransmision::Si {
                hora_real: Some("08:00".to_string()),
            },
        )
    }

    #[test]
    fn test_missing_report_is_pending() {
        let reportes = vec![si(1, 10, 2), si(2, 10, 1), si(1, 11, 1)];
        assert_eq!(
            ReportResolver::find(&reportes, 1, 10, fecha(1)),
            Resolucion::Pendiente
        );
        assert_eq!(ReportResolver::find(&[], 1, 10, fecha(1)), Resolucion::Pendiente);
    }

    #[test]
    fn test_exact_match_found() {
        let reportes = vec![si(1, 10, 1), si(1, 10, 2)];
        let resolucion = ReportResolver::find(&reportes, 1, 10, fecha(2));
        assert_eq!(resolucion, Resolucion::Encontrado(&reportes[1]));
        assert_eq!(resolucion.coincidencias(), 1);
    }

    #[test]
    fn test_duplicates_pick_most_recently_updated() {
        let mut viejo = si(1, 10, 1);
        viejo.id = Some(7);
        viejo.updated_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
        let mut nuevo = Reporte::new(1, 10, fecha(1), ResultadoTransmision::No {
            target: Some("Fta".to_string()),
            motivo: None,
        });
        nuevo.id = Some(3);
        nuevo.updated_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap());
        let mut sin_fecha = si(1, 10, 1);
        sin_fecha.id = Some(99);

        let reportes = vec![viejo, nuevo.clone(), sin_fecha];
        match ReportResolver::find(&reportes, 1, 10, fecha(1)) {
            Resolucion::Ambiguo { elegido, duplicados } => {
                assert_eq!(duplicados, 3);
                assert_eq!(elegido, &nuevo);
            }
            otro => panic!("期望 Ambiguo, 实际 {:?}", otro),
        }
    }

    #[test]
    fn test_duplicates_without_timestamps_fall_back_to_id_then_position() {
        let mut a = si(1, 10, 1);
        a.id = Some(5);
        let mut b = si(1, 10, 1);
        b.id = Some(2);
        let reportes = vec![a, b];
        let resolucion = ReportResolver::find(&reportes, 1, 10, fecha(1));
        assert_eq!(resolucion.reporte().and_then(|r| r.id), Some(5));

        let sin_id = vec![si(1, 10, 1), si(1, 10, 1)];
        match ReportResolver::find(&sin_id, 1, 10, fecha(1)) {
            Resolucion::Ambiguo { elegido, .. } => assert!(std::ptr::eq(elegido, &sin_id[1])),
            otro => panic!("期望 Ambiguo, 实际 {:?}", otro),
        }
    }
}
