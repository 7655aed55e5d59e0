// ==========================================
// 传输监控系统 - 日期格式转换
// ==========================================
// 后端历史上混用 YYYY-MM-DD 与 DD/MM/YYYY 两种格式
// ==========================================

use crate::adapter::error::{AdapterError, AdapterResult};
use chrono::NaiveDate;

/// ISO 日期格式
pub const FORMATO_ISO: &str = "%Y-%m-%d";

/// 后端旧接口使用的日期格式
pub const FORMATO_DMY: &str = "%d/%m/%Y";

/// 解析日期（兼容 YYYY-MM-DD / DD/MM/YYYY）
pub fn parse_fecha(texto: &str) -> AdapterResult<NaiveDate> {
    let limpio = texto.trim();
    // 时间戳形式只取日期部分
    let limpio = limpio.split('T').next().unwrap_or(limpio);
    NaiveDate::parse_from_str(limpio, FORMATO_ISO)
        .or_else(|_| NaiveDate::parse_from_str(limpio, FORMATO_DMY))
        .map_err(|_| AdapterError::DateParse(texto.to_string()))
}

/// 日期 → YYYY-MM-DD
pub fn fecha_iso(fecha: NaiveDate) -> String {
    fecha.format(FORMATO_ISO).to_string()
}

/// 日期 → DD/MM/YYYY
pub fn fecha_dmy(fecha: NaiveDate) -> String {
    fecha.format(FORMATO_DMY).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_formats() {
        let esperado = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(parse_fecha("2024-01-03").unwrap(), esperado);
        assert_eq!(parse_fecha("03/01/2024").unwrap(), esperado);
        assert_eq!(parse_fecha("2024-01-03T00:00:00Z").unwrap(), esperado);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse_fecha("2024/13/45"), Err(AdapterError::DateParse(_))));
        assert!(parse_fecha("").is_err());
    }

    #[test]
    fn test_format_conversions() {
        let fecha = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(fecha_iso(fecha), "2024-02-29");
        assert_eq!(fecha_dmy(fecha), "29/02/2024");
    }
}
