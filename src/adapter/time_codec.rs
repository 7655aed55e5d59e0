// ==========================================
// 传输监控系统 - 时间编解码
// ==========================================
// 职责: "HH:MM" 字符串 ↔ 后端结构化时间 {hour, minute, second, nano}
// 读路径宽松（畸形值回退 00:00），写路径严格（返回 TimeParse）
// ==========================================

use crate::adapter::error::{AdapterError, AdapterResult};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

// ==========================================
// HoraBackend - 后端结构化时间
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoraBackend {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nano: u32,
}

impl HoraBackend {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour,
            minute,
            second: 0,
            nano: 0,
        }
    }

    /// 补零格式 "HH:MM"
    pub fn to_hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_nano_opt(self.hour, self.minute, self.second, self.nano)
    }
}

impl From<NaiveTime> for HoraBackend {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            nano: t.nanosecond(),
        }
    }
}

// ==========================================
// HoraWire - 后端时间字段的两种形态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoraWire {
    Texto(String),
    Estructurada(HoraBackend),
}

impl HoraWire {
    /// 转为 "HH:MM"
    ///
    /// 字符串形态: "HH:MM" / "HH:MM:SS[.fff]" 截去秒；其余原样透传
    pub fn to_hhmm(&self) -> String {
        match self {
            HoraWire::Texto(texto) => recortar_segundos(texto),
            HoraWire::Estructurada(hora) => hora.to_hhmm(),
        }
    }
}

fn recortar_segundos(texto: &str) -> String {
    let limpio = texto.trim();
    if let Ok(hora) = parse_hora(limpio) {
        return hora.to_hhmm();
    }
    match NaiveTime::parse_from_str(limpio, "%H:%M:%S%.f") {
        Ok(t) => HoraBackend::from(t).to_hhmm(),
        Err(_) => texto.to_string(),
    }
}

/// 结构化时间 → "HH:MM"
pub fn hora_to_string(hora: &HoraBackend) -> String {
    hora.to_hhmm()
}

/// 可选时间字段 → "HH:MM"，空字符串视为缺失
pub fn hora_wire_to_string(hora: Option<&HoraWire>) -> Option<String> {
    hora.map(HoraWire::to_hhmm).filter(|s| !s.trim().is_empty())
}

/// "HH:MM" → 结构化时间（宽松）
///
/// # 规则
/// - 空串或无法解析的部分按 0 处理
/// - 回退时记录 warn，不返回错误
pub fn string_to_hora(texto: &str) -> HoraBackend {
    match parse_hora(texto) {
        Ok(hora) => hora,
        Err(e) => {
            if !texto.trim().is_empty() {
                tracing::warn!(hora = texto, error = %e, "时间格式异常，按分段宽松解析");
            }
            let mut partes = texto.trim().splitn(2, ':');
            let hour = partes
                .next()
                .and_then(|p| p.trim().parse::<u32>().ok())
                .unwrap_or(0);
            let minute = partes
                .next()
                .and_then(|p| p.trim().parse::<u32>().ok())
                .unwrap_or(0);
            HoraBackend::new(hour, minute)
        }
    }
}

/// "HH:MM" → 结构化时间（严格）
///
/// # 返回
/// - Ok(HoraBackend): second/nano 固定为 0
/// - Err(TimeParse): 格式错误
/// - Err(TimeOutOfRange): 小时 ≥ 24 或分钟 ≥ 60
pub fn parse_hora(texto: &str) -> AdapterResult<HoraBackend> {
    let limpio = texto.trim();
    let (h, m) = limpio
        .split_once(':')
        .ok_or_else(|| AdapterError::TimeParse(texto.to_string()))?;

    let valido = |p: &str| !p.is_empty() && p.len() <= 2 && p.chars().all(|c| c.is_ascii_digit());
    if !valido(h) || !valido(m) {
        return Err(AdapterError::TimeParse(texto.to_string()));
    }

    let hour: u32 = h.parse().map_err(|_| AdapterError::TimeParse(texto.to_string()))?;
    let minute: u32 = m.parse().map_err(|_| AdapterError::TimeParse(texto.to_string()))?;
    if hour >= 24 || minute >= 60 {
        return Err(AdapterError::TimeOutOfRange { hour, minute });
    }

    Ok(HoraBackend::new(hour, minute))
}

/// 规范化为补零 "HH:MM"（严格）
pub fn normalizar_hhmm(texto: &str) -> AdapterResult<String> {
    parse_hora(texto).map(|h| h.to_hhmm())
}
