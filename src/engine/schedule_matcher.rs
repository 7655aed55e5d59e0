// ==========================================
// 传输监控系统 - 排期匹配
// ==========================================
// 职责: 判断节目在某日是否播出；判断节目是否属于某分台
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::filial::Filial;
use crate::domain::programa::Programa;
use crate::domain::types::DiaSemana;
use chrono::NaiveDate;

pub struct ScheduleMatcher;

impl ScheduleMatcher {
    /// 节目在指定日期是否播出
    ///
    /// # 规则
    /// - 日期换算为规范星期标记
    /// - 节目的每个星期先规范化再比较（逐格求值，不重复记录 warn）
    /// - 星期集合为空 → 永不播出
    ///
    /// # 示例
    /// ```
    /// use transmisiones_control::domain::{DiaSemana, Programa};
    /// use transmisiones_control::engine::ScheduleMatcher;
    ///
    /// let programa = Programa::new(1, "Noticiero", "08:00").con_dias(&[DiaSemana::Lunes]);
    /// let lunes = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// assert!(ScheduleMatcher::is_scheduled(&programa, lunes));
    /// ```
    pub fn is_scheduled(programa: &Programa, fecha: NaiveDate) -> bool {
        let dia_fecha = DiaSemana::de_fecha(fecha);
        programa
            .dias_semana
            .iter()
            .any(|dia| DiaSemana::from_name(dia) == Some(dia_fecha))
    }

    /// 节目是否关联到分台
    ///
    /// # 规则
    /// - 节目自带分台列表非空时以其为准
    /// - 否则看分台自带的节目列表
    pub fn programa_asociado(filial: &Filial, programa: &Programa) -> bool {
        if !programa.filiales_ids.is_empty() {
            return programa.filiales_ids.contains(&filial.id);
        }
        filial.programa_ids.contains(&programa.id)
    }

    /// 分台关联的节目（保持输入顺序）
    pub fn programas_de_filial<'a>(filial: &Filial, programas: &'a [Programa]) -> Vec<&'a Programa> {
        programas
            .iter()
            .filter(|p| Self::programa_asociado(filial, p))
            .collect()
    }
}
