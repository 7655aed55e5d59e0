// ==========================================
// 传输监控系统 - 网格导出（CSV）
// ==========================================
// 列: 日期 / 星期 / 分台 / 节目 / 计划时间 / 状态 / 实际时间 / 原因 / 说明 / 报告 id / 重复数
// ==========================================

use crate::adapter::date_format::fecha_dmy;
use crate::adapter::target_mapper::target_label;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::grid::CeldaGrid;
use crate::domain::programa::Programa;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

#[derive(Debug, Serialize)]
struct FilaCsv<'a> {
    fecha: String,
    dia: &'a str,
    filial_id: i64,
    programa_id: i64,
    programa: &'a str,
    hora_programa: &'a str,
    estado: String,
    hora_real: Option<&'a str>,
    target: Option<String>,
    motivo: Option<&'a str>,
    reporte_id: Option<i64>,
    duplicados: usize,
}

/// 写出网格到任意 Write
///
/// # 参数
/// - programas: 用于查节目名称；找不到时留空
pub fn write_grid_csv<W: Write>(writer: W, grid: &[CeldaGrid], programas: &[Programa]) -> ApiResult<()> {
    let nombres: HashMap<i64, &str> = programas.iter().map(|p| (p.id, p.nombre.as_str())).collect();
    let mut csv_writer = csv::WriterBuilder::new().has_headers(true).from_writer(writer);

    for celda in grid {
        csv_writer.serialize(FilaCsv {
            fecha: fecha_dmy(celda.fecha),
            dia: celda.dia.token(),
            filial_id: celda.filial_id,
            programa_id: celda.programa_id,
            programa: nombres.get(&celda.programa_id).copied().unwrap_or(""),
            hora_programa: &celda.hora_programa,
            estado: celda.estado.to_string(),
            hora_real: celda.hora_real(),
            target: celda.target().map(target_label),
            motivo: celda.motivo(),
            reporte_id: celda.reporte_id,
            duplicados: celda.duplicados,
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| ApiError::ExportError(e.to_string()))?;
    Ok(())
}

/// 网格 → CSV 文本
pub fn grid_to_csv(grid: &[CeldaGrid], programas: &[Programa]) -> ApiResult<String> {
    let mut buffer = Vec::new();
    write_grid_csv(&mut buffer, grid, programas)?;
    String::from_utf8(buffer).map_err(|e| ApiError::ExportError(e.to_string()))
}
