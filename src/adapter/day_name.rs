// ==========================================
// 传输监控系统 - 星期名称规范化
// ==========================================
// 职责: 任意大小写/重音写法 → 规范标记 (LUNES..DOMINGO)
// 后端 diasSemana 字段可能是单个字符串，也可能是数组
// ==========================================

use crate::adapter::error::{AdapterError, AdapterResult};
use crate::domain::types::DiaSemana;
use serde::{Deserialize, Serialize};

/// 去掉西语变音符号（输入已转大写）
fn quitar_acentos(texto: &str) -> String {
    texto
        .chars()
        .map(|c| match c {
            'Á' | 'À' | 'Â' | 'Ä' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            other => other,
        })
        .collect()
}

/// 规范化星期名称（宽松）
///
/// # 规则
/// - TRIM + UPPER + 去重音后匹配 7 个规范标记之一
/// - 无法识别 → 原样返回（并记录 warn）
///
/// # 示例
/// ```
/// use transmisiones_control::adapter::day_name::normalize_day_name;
/// assert_eq!(normalize_day_name("Miércoles"), "MIERCOLES");
/// assert_eq!(normalize_day_name("feriado"), "feriado");
/// ```
pub fn normalize_day_name(raw: &str) -> String {
    match DiaSemana::from_name(raw) {
        Some(dia) => dia.token().to_string(),
        None => {
            tracing::warn!(dia = raw, "星期名称无法识别，原样保留");
            raw.to_string()
        }
    }
}

impl DiaSemana {
    /// 从任意写法解析星期，无法识别返回 None
    pub fn from_name(raw: &str) -> Option<Self> {
        let limpio = quitar_acentos(&raw.trim().to_uppercase());
        DiaSemana::from_token(&limpio)
    }

    /// 严格解析，无法识别返回 UnknownDay
    pub fn parse(raw: &str) -> AdapterResult<Self> {
        DiaSemana::from_name(raw).ok_or_else(|| AdapterError::UnknownDay(raw.to_string()))
    }
}

// ==========================================
// DiasSemanaWire - 后端星期字段的两种形态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiasSemanaWire {
    Uno(String),
    Varios(Vec<String>),
}

impl Default for DiasSemanaWire {
    fn default() -> Self {
        DiasSemanaWire::Varios(Vec::new())
    }
}

impl DiasSemanaWire {
    /// 展开为列表并逐个规范化
    pub fn normalizar(&self) -> Vec<String> {
        match self {
            DiasSemanaWire::Uno(dia) if dia.trim().is_empty() => Vec::new(),
            DiasSemanaWire::Uno(dia) => vec![normalize_day_name(dia)],
            DiasSemanaWire::Varios(dias) => dias.iter().map(|d| normalize_day_name(d)).collect(),
        }
    }
}
