// ==========================================
// 传输监控系统 - 传输报告领域模型
// ==========================================
// 自然键: (filial_id, programa_id, fecha)，每个键至多一条报告
// 状态相关字段随状态变化，Pendiente 时全部清空
// ==========================================

use crate::domain::types::EstadoTransmision;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ReporteKey - 报告自然键
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteKey {
    pub filial_id: i64,
    pub programa_id: i64,
    pub fecha: NaiveDate,
}

impl ReporteKey {
    pub fn new(filial_id: i64, programa_id: i64, fecha: NaiveDate) -> Self {
        Self {
            filial_id,
            programa_id,
            fecha,
        }
    }
}

// ==========================================
// ResultadoTransmision - 状态及其附带字段
// ==========================================
// target 使用前端缩写 (Fta/Enf/P.Tec/F.Serv/Tde/Otros)
// motivo 只在 target == Otros 时有意义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "estado", rename_all = "lowercase")]
pub enum ResultadoTransmision {
    Pendiente,
    Si {
        hora_real: Option<String>,
    },
    No {
        target: Option<String>,
        motivo: Option<String>,
    },
    Tarde {
        hora_programada: Option<String>,
        hora_real: Option<String>,
        target: Option<String>,
        motivo: Option<String>,
    },
}

impl ResultadoTransmision {
    pub fn estado(&self) -> EstadoTransmision {
        match self {
            ResultadoTransmision::Pendiente => EstadoTransmision::Pendiente,
            ResultadoTransmision::Si { .. } => EstadoTransmision::Si,
            ResultadoTransmision::No { .. } => EstadoTransmision::No,
            ResultadoTransmision::Tarde { .. } => EstadoTransmision::Tarde,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            ResultadoTransmision::No { target, .. } | ResultadoTransmision::Tarde { target, .. } => {
                target.as_deref()
            }
            _ => None,
        }
    }

    pub fn motivo(&self) -> Option<&str> {
        match self {
            ResultadoTransmision::No { motivo, .. } | ResultadoTransmision::Tarde { motivo, .. } => {
                motivo.as_deref()
            }
            _ => None,
        }
    }

    /// 实际播出时间（Si / Tarde）
    pub fn hora_real(&self) -> Option<&str> {
        match self {
            ResultadoTransmision::Si { hora_real } | ResultadoTransmision::Tarde { hora_real, .. } => {
                hora_real.as_deref()
            }
            _ => None,
        }
    }
}

// ==========================================
// Reporte - 传输报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reporte {
    /// None 表示尚未在后端创建
    pub id: Option<i64>,
    pub filial_id: i64,
    pub programa_id: i64,
    pub fecha: NaiveDate,
    pub resultado: ResultadoTransmision,
    pub observaciones: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reporte {
    pub fn new(filial_id: i64, programa_id: i64, fecha: NaiveDate, resultado: ResultadoTransmision) -> Self {
        Self {
            id: None,
            filial_id,
            programa_id,
            fecha,
            resultado,
            observaciones: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn key(&self) -> ReporteKey {
        ReporteKey::new(self.filial_id, self.programa_id, self.fecha)
    }

    pub fn estado(&self) -> EstadoTransmision {
        self.resultado.estado()
    }

    pub fn coincide(&self, key: &ReporteKey) -> bool {
        self.filial_id == key.filial_id
            && self.programa_id == key.programa_id
            && self.fecha == key.fecha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resultado_accessors() {
        let tarde = ResultadoTransmision::Tarde {
            hora_programada: Some("08:00".to_string()),
            hora_real: Some("08:20".to_string()),
            target: Some("Otros".to_string()),
            motivo: Some("Corte de luz".to_string()),
        };
        assert_eq!(tarde.estado(), EstadoTransmision::Tarde);
        assert_eq!(tarde.target(), Some("Otros"));
        assert_eq!(tarde.motivo(), Some("Corte de luz"));
        assert_eq!(tarde.hora_real(), Some("08:20"));

        assert_eq!(ResultadoTransmision::Pendiente.target(), None);
        assert_eq!(ResultadoTransmision::Pendiente.motivo(), None);
    }

    #[test]
    fn test_resultado_serde_tag() {
        let si = ResultadoTransmision::Si {
            hora_real: Some("10:00".to_string()),
        };
        let json = serde_json::to_value(&si).unwrap();
        assert_eq!(json["estado"], "si");
        assert_eq!(json["hora_real"], "10:00");
    }

    #[test]
    fn test_key_matching() {
        let fecha = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let reporte = Reporte::new(1, 10, fecha, ResultadoTransmision::Pendiente);
        assert!(reporte.coincide(&ReporteKey::new(1, 10, fecha)));
        assert!(!reporte.coincide(&ReporteKey::new(2, 10, fecha)));
    }
}
