// ==========================================
// 传输监控系统 - 领域类型定义
// ==========================================
// 职责: 星期、传输状态、格子状态等基础枚举
// 红线: 内部比较一律使用规范星期标记（无重音）
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 星期 (Día de la semana)
// ==========================================
// 规范标记: LUNES..DOMINGO，不含变音符号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiaSemana {
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
    Domingo,
}

impl DiaSemana {
    /// 一周七天（周一起）
    pub const TODOS: [DiaSemana; 7] = [
        DiaSemana::Lunes,
        DiaSemana::Martes,
        DiaSemana::Miercoles,
        DiaSemana::Jueves,
        DiaSemana::Viernes,
        DiaSemana::Sabado,
        DiaSemana::Domingo,
    ];

    /// 工作日默认排期（新建节目未指定星期时使用）
    pub const LABORALES: [DiaSemana; 5] = [
        DiaSemana::Lunes,
        DiaSemana::Martes,
        DiaSemana::Miercoles,
        DiaSemana::Jueves,
        DiaSemana::Viernes,
    ];

    /// 规范标记
    pub fn token(&self) -> &'static str {
        match self {
            DiaSemana::Lunes => "LUNES",
            DiaSemana::Martes => "MARTES",
            DiaSemana::Miercoles => "MIERCOLES",
            DiaSemana::Jueves => "JUEVES",
            DiaSemana::Viernes => "VIERNES",
            DiaSemana::Sabado => "SABADO",
            DiaSemana::Domingo => "DOMINGO",
        }
    }

    /// 从规范标记精确匹配（不做重音/大小写处理）
    pub fn from_token(token: &str) -> Option<Self> {
        DiaSemana::TODOS.iter().copied().find(|d| d.token() == token)
    }

    /// 日期对应的星期
    pub fn de_fecha(fecha: NaiveDate) -> Self {
        DiaSemana::from(fecha.weekday())
    }
}

impl From<Weekday> for DiaSemana {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DiaSemana::Lunes,
            Weekday::Tue => DiaSemana::Martes,
            Weekday::Wed => DiaSemana::Miercoles,
            Weekday::Thu => DiaSemana::Jueves,
            Weekday::Fri => DiaSemana::Viernes,
            Weekday::Sat => DiaSemana::Sabado,
            Weekday::Sun => DiaSemana::Domingo,
        }
    }
}

impl fmt::Display for DiaSemana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

// ==========================================
// 传输状态 (Estado de transmisión)
// ==========================================
// 前端小写: pendiente / si / no / tarde
// 后端首字母大写: Pendiente / Si / No / Tarde
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoTransmision {
    Pendiente, // 待填报
    Si,        // 准时传输
    No,        // 未传输
    Tarde,     // 迟传输
}

impl EstadoTransmision {
    /// 前端标记
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoTransmision::Pendiente => "pendiente",
            EstadoTransmision::Si => "si",
            EstadoTransmision::No => "no",
            EstadoTransmision::Tarde => "tarde",
        }
    }

    /// 后端 estadoTransmision 字段取值
    pub fn backend_str(&self) -> &'static str {
        match self {
            EstadoTransmision::Pendiente => "Pendiente",
            EstadoTransmision::Si => "Si",
            EstadoTransmision::No => "No",
            EstadoTransmision::Tarde => "Tarde",
        }
    }

    /// 从任意大小写解析，未知值视为 Pendiente
    pub fn from_str_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "si" | "sí" => EstadoTransmision::Si,
            "no" => EstadoTransmision::No,
            "tarde" => EstadoTransmision::Tarde,
            _ => EstadoTransmision::Pendiente,
        }
    }
}

impl fmt::Display for EstadoTransmision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 格子状态 (Estado de celda)
// ==========================================
// NoProgramado 只由"节目当天不播出"产生，对该日期是终态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoCelda {
    NoProgramado,
    Pendiente,
    Si,
    No,
    Tarde,
}

impl EstadoCelda {
    /// 是否为已排期格子
    pub fn es_programado(&self) -> bool {
        !matches!(self, EstadoCelda::NoProgramado)
    }
}

impl From<EstadoTransmision> for EstadoCelda {
    fn from(estado: EstadoTransmision) -> Self {
        match estado {
            EstadoTransmision::Pendiente => EstadoCelda::Pendiente,
            EstadoTransmision::Si => EstadoCelda::Si,
            EstadoTransmision::No => EstadoCelda::No,
            EstadoTransmision::Tarde => EstadoCelda::Tarde,
        }
    }
}

impl fmt::Display for EstadoCelda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstadoCelda::NoProgramado => write!(f, "NO_PROGRAMADO"),
            EstadoCelda::Pendiente => write!(f, "PENDIENTE"),
            EstadoCelda::Si => write!(f, "SI"),
            EstadoCelda::No => write!(f, "NO"),
            EstadoCelda::Tarde => write!(f, "TARDE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dia_de_fecha() {
        // 2024-01-01 是周一
        let lunes = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(DiaSemana::de_fecha(lunes), DiaSemana::Lunes);
        let domingo = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(DiaSemana::de_fecha(domingo), DiaSemana::Domingo);
    }

    #[test]
    fn test_token_roundtrip() {
        for dia in DiaSemana::TODOS {
            assert_eq!(DiaSemana::from_token(dia.token()), Some(dia));
        }
        assert_eq!(DiaSemana::from_token("MIÉRCOLES"), None);
    }

    #[test]
    fn test_estado_lenient() {
        assert_eq!(EstadoTransmision::from_str_lenient("Si"), EstadoTransmision::Si);
        assert_eq!(EstadoTransmision::from_str_lenient("TARDE"), EstadoTransmision::Tarde);
        assert_eq!(EstadoTransmision::from_str_lenient("no"), EstadoTransmision::No);
        assert_eq!(
            EstadoTransmision::from_str_lenient("desconocido"),
            EstadoTransmision::Pendiente
        );
    }

    #[test]
    fn test_serde_dia() {
        let json = serde_json::to_string(&DiaSemana::Miercoles).unwrap();
        assert_eq!(json, "\"MIERCOLES\"");
    }
}
