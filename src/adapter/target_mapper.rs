// ==========================================
// 传输监控系统 - 原因代码映射 (Target / Motivo)
// ==========================================
// 职责: 前端缩写 ↔ 后端全称；Otros/Otro 特例的唯一出处
// 红线: 只有 Otros 允许附带自由文本 motivo
// ==========================================

use crate::domain::types::EstadoTransmision;
use serde::{Deserialize, Serialize};

// ==========================================
// TargetCode - 原因代码
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetCode {
    Falta,
    Enfermedad,
    ProblemaTecnico,
    FallaServicios,
    Tarde,
    Otros,
}

impl TargetCode {
    pub const TODOS: [TargetCode; 6] = [
        TargetCode::Falta,
        TargetCode::Enfermedad,
        TargetCode::ProblemaTecnico,
        TargetCode::FallaServicios,
        TargetCode::Tarde,
        TargetCode::Otros,
    ];

    /// 未传输可选原因
    pub const NO_TRANSMISION: [TargetCode; 5] = [
        TargetCode::Falta,
        TargetCode::Enfermedad,
        TargetCode::ProblemaTecnico,
        TargetCode::FallaServicios,
        TargetCode::Otros,
    ];

    /// 迟传输可选原因
    pub const RETRASO: [TargetCode; 4] = [
        TargetCode::Tarde,
        TargetCode::ProblemaTecnico,
        TargetCode::FallaServicios,
        TargetCode::Otros,
    ];

    /// 前端缩写
    pub fn abbr(&self) -> &'static str {
        match self {
            TargetCode::Falta => "Fta",
            TargetCode::Enfermedad => "Enf",
            TargetCode::ProblemaTecnico => "P.Tec",
            TargetCode::FallaServicios => "F.Serv",
            TargetCode::Tarde => "Tde",
            TargetCode::Otros => "Otros",
        }
    }

    /// 后端全称（注意 Otros → Otro）
    pub fn backend(&self) -> &'static str {
        match self {
            TargetCode::Falta => "Falta",
            TargetCode::Enfermedad => "Enfermedad",
            TargetCode::ProblemaTecnico => "Problema técnico",
            TargetCode::FallaServicios => "Falla de servicios",
            TargetCode::Tarde => "Tarde",
            TargetCode::Otros => "Otro",
        }
    }

    /// 下拉框展示文本
    pub fn label(&self) -> &'static str {
        match self {
            TargetCode::Falta => "Falta (Fta)",
            TargetCode::Enfermedad => "Enfermedad (Enf)",
            TargetCode::ProblemaTecnico => "Problema técnico (P. Tec)",
            TargetCode::FallaServicios => "Falla de servicios (F. Serv)",
            TargetCode::Tarde => "Tarde (Tde)",
            TargetCode::Otros => "Otros",
        }
    }

    /// 缩写或全称均可识别（Otro 与 Otros 等价）
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        TargetCode::TODOS
            .iter()
            .copied()
            .find(|t| t.abbr() == code || t.backend() == code)
    }

    pub fn requiere_motivo(&self) -> bool {
        matches!(self, TargetCode::Otros)
    }

    /// 该状态下可选的原因代码
    pub fn permitidos(estado: EstadoTransmision) -> &'static [TargetCode] {
        match estado {
            EstadoTransmision::No => &TargetCode::NO_TRANSMISION,
            EstadoTransmision::Tarde => &TargetCode::RETRASO,
            EstadoTransmision::Si | EstadoTransmision::Pendiente => &[],
        }
    }
}

/// 前端缩写 → 后端全称；无法识别原样返回
pub fn to_backend(abbr: &str) -> String {
    match TargetCode::parse(abbr) {
        Some(code) => code.backend().to_string(),
        None => abbr.to_string(),
    }
}

/// 后端全称 → 前端缩写；无法识别原样返回
pub fn to_frontend(backend: &str) -> String {
    match TargetCode::parse(backend) {
        Some(code) => code.abbr().to_string(),
        None => backend.to_string(),
    }
}

/// 缩写/全称是否属于已知词表
pub fn is_valid_target(code: &str) -> bool {
    TargetCode::parse(code).is_some()
}

/// 展示用完整标签（未知值原样返回）
pub fn target_label(code: &str) -> String {
    match TargetCode::parse(code) {
        Some(TargetCode::Otros) => "Otros".to_string(),
        Some(c) => c.backend().to_string(),
        None => code.to_string(),
    }
}

/// 有效 motivo：仅当 target 为 Otros/Otro 且 motivo 非空时保留
pub fn motivo_efectivo(target: Option<&str>, motivo: Option<&str>) -> Option<String> {
    let es_otros = target
        .and_then(TargetCode::parse)
        .map(|t| t.requiere_motivo())
        .unwrap_or(false);
    if !es_otros {
        return None;
    }
    motivo
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// 从旧数据的自由文本中反推原因代码
///
/// 旧版迟传输报告只写了 motivo，没有 target
pub fn target_from_motivo(motivo: &str) -> Option<TargetCode> {
    if motivo.trim().is_empty() {
        return None;
    }
    if let Some(code) = TargetCode::TODOS
        .iter()
        .copied()
        .find(|t| motivo.contains(t.backend()))
    {
        return Some(code);
    }
    if motivo.to_lowercase().contains("tarde") {
        return Some(TargetCode::Tarde);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbr_to_backend() {
        assert_eq!(to_backend("Fta"), "Falta");
        assert_eq!(to_backend("Enf"), "Enfermedad");
        assert_eq!(to_backend("P.Tec"), "Problema técnico");
        assert_eq!(to_backend("F.Serv"), "Falla de servicios");
        assert_eq!(to_backend("Tde"), "Tarde");
        assert_eq!(to_backend("Otros"), "Otro");
        assert_eq!(to_backend("Otro"), "Otro");
    }

    #[test]
    fn test_backend_to_abbr() {
        assert_eq!(to_frontend("Otro"), "Otros");
        assert_eq!(to_frontend("Problema técnico"), "P.Tec");
    }

    #[test]
    fn test_roundtrips() {
        for code in TargetCode::TODOS {
            assert_eq!(to_backend(&to_frontend(code.backend())), code.backend());
            assert_eq!(to_frontend(&to_backend(code.abbr())), code.abbr());
        }
    }

    #[test]
    fn test_unknown_identity() {
        assert_eq!(to_backend("Lluvia"), "Lluvia");
        assert_eq!(to_frontend("Lluvia"), "Lluvia");
        assert!(!is_valid_target("Lluvia"));
        assert!(is_valid_target("Otro"));
    }

    #[test]
    fn test_motivo_only_for_otros() {
        assert_eq!(
            motivo_efectivo(Some("Otros"), Some("Corte de luz")),
            Some("Corte de luz".to_string())
        );
        assert_eq!(
            motivo_efectivo(Some("Otro"), Some("Corte de luz")),
            Some("Corte de luz".to_string())
        );
        assert_eq!(motivo_efectivo(Some("Fta"), Some("ignorado")), None);
        assert_eq!(motivo_efectivo(None, Some("ignorado")), None);
        assert_eq!(motivo_efectivo(Some("Otros"), Some("   ")), None);
    }

    #[test]
    fn test_vocabulary_per_estado() {
        assert!(TargetCode::permitidos(EstadoTransmision::No).contains(&TargetCode::Falta));
        assert!(!TargetCode::permitidos(EstadoTransmision::No).contains(&TargetCode::Tarde));
        assert!(TargetCode::permitidos(EstadoTransmision::Tarde).contains(&TargetCode::Tarde));
        assert!(!TargetCode::permitidos(EstadoTransmision::Tarde).contains(&TargetCode::Enfermedad));
        assert!(TargetCode::permitidos(EstadoTransmision::Si).is_empty());
    }

    #[test]
    fn test_target_from_motivo() {
        assert_eq!(
            target_from_motivo("Falla de servicios en planta"),
            Some(TargetCode::FallaServicios)
        );
        assert_eq!(target_from_motivo("llegó tarde el locutor"), Some(TargetCode::Tarde));
        assert_eq!(target_from_motivo("sin datos"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(target_label("P.Tec"), "Problema técnico");
        assert_eq!(target_label("Otros"), "Otros");
        assert_eq!(TargetCode::Falta.label(), "Falta (Fta)");
    }
}
