// ==========================================
// 传输监控系统 - 后端报文适配
// ==========================================
// 职责: 后端 JSON 结构 ↔ 领域模型
// 读路径: 容忍形态差异（星期字符串/数组、时间字符串/对象、日期两种格式）
// 写路径: 严格校验后再组装报文
// ==========================================

use crate::adapter::date_format::{fecha_iso, parse_fecha};
use crate::adapter::day_name::DiasSemanaWire;
use crate::adapter::error::{AdapterError, AdapterResult};
use crate::adapter::target_mapper::{
    is_valid_target, motivo_efectivo, target_from_motivo, to_backend, to_frontend,
};
use crate::adapter::time_codec::{hora_wire_to_string, parse_hora, HoraBackend, HoraWire};
use crate::domain::filial::{Filial, FilialInput};
use crate::domain::programa::{Programa, ProgramaInput};
use crate::domain::reporte::{Reporte, ResultadoTransmision};
use crate::domain::types::{DiaSemana, EstadoTransmision};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// 节目未指定开播时间时使用的默认值
pub const HORA_INICIO_DEFAULT: &str = "08:00";

// ==========================================
// 入站报文（后端 → 本系统）
// ==========================================

/// 嵌套关联只取 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntidadRef {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilialBackend {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub is_activo: bool,
    #[serde(default)]
    pub programa_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub programas: Option<Vec<EntidadRef>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub update_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramaBackend {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub is_activo: bool,
    #[serde(default)]
    pub dias_semana: DiasSemanaWire,
    #[serde(default)]
    pub hora_inicio: Option<HoraWire>,
    #[serde(default)]
    pub filiales_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub filiales: Option<Vec<EntidadRef>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub update_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteBackend {
    #[serde(default, alias = "id_reporte")]
    pub id: Option<i64>,
    pub fecha: String,
    #[serde(default)]
    pub estado_transmision: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub motivo: Option<String>,
    #[serde(default)]
    pub filial_id: Option<i64>,
    #[serde(default)]
    pub programa_id: Option<i64>,
    #[serde(default)]
    pub hora: Option<HoraWire>,
    #[serde(default, rename = "hora_tt")]
    pub hora_tt: Option<HoraWire>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    pub update_at: Option<String>,
}

/// 解析后端时间戳（RFC3339 或无时区 ISO）
pub fn parse_timestamp(texto: Option<&str>) -> Option<DateTime<Utc>> {
    let texto = texto?.trim();
    if texto.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(texto) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(texto, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(texto, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

fn ids_de(directos: Option<Vec<i64>>, anidados: Option<Vec<EntidadRef>>) -> Vec<i64> {
    match directos {
        Some(ids) if !ids.is_empty() => ids,
        _ => anidados
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.id)
            .collect(),
    }
}

/// 后端分台 → Filial
pub fn filial_from_backend(backend: FilialBackend) -> Filial {
    Filial {
        id: backend.id,
        nombre: backend.nombre,
        is_activo: backend.is_activo,
        programa_ids: ids_de(backend.programa_ids, backend.programas),
    }
}

/// 后端节目 → Programa
pub fn programa_from_backend(backend: ProgramaBackend) -> Programa {
    let hora_inicio = hora_wire_to_string(backend.hora_inicio.as_ref())
        .unwrap_or_else(|| "00:00".to_string());

    Programa {
        id: backend.id,
        nombre: backend.nombre,
        is_activo: backend.is_activo,
        hora_inicio,
        dias_semana: backend.dias_semana.normalizar(),
        filiales_ids: ids_de(backend.filiales_ids, backend.filiales),
    }
}

/// 后端报告 → Reporte
///
/// # 规则
/// - target 转为前端缩写
/// - motivo 只在 Otros 时保留
/// - Pendiente / Si 清空原因字段
///
/// # 返回
/// - Err(MissingField): 缺少 filialId / programaId
/// - Err(DateParse): 日期无法解析
pub fn reporte_from_backend(backend: ReporteBackend) -> AdapterResult<Reporte> {
    let filial_id = backend
        .filial_id
        .ok_or_else(|| AdapterError::MissingField("filialId".to_string()))?;
    let programa_id = backend
        .programa_id
        .ok_or_else(|| AdapterError::MissingField("programaId".to_string()))?;
    let fecha = parse_fecha(&backend.fecha)?;

    let estado = backend
        .estado_transmision
        .as_deref()
        .map(EstadoTransmision::from_str_lenient)
        .unwrap_or(EstadoTransmision::Pendiente);

    let target = match backend.target.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => {
            if !is_valid_target(t) {
                tracing::warn!(target = t, "原因代码无法识别，原样保留");
            }
            Some(to_frontend(t))
        }
        // 旧数据只写了 motivo
        None if matches!(estado, EstadoTransmision::No | EstadoTransmision::Tarde) => backend
            .motivo
            .as_deref()
            .and_then(target_from_motivo)
            .map(|code| code.abbr().to_string()),
        None => None,
    };
    let motivo = motivo_efectivo(target.as_deref(), backend.motivo.as_deref());
    let hora = hora_wire_to_string(backend.hora.as_ref());
    let hora_tt = hora_wire_to_string(backend.hora_tt.as_ref());

    let resultado = match estado {
        EstadoTransmision::Pendiente => ResultadoTransmision::Pendiente,
        EstadoTransmision::Si => ResultadoTransmision::Si { hora_real: hora },
        EstadoTransmision::No => ResultadoTransmision::No { target, motivo },
        EstadoTransmision::Tarde => ResultadoTransmision::Tarde {
            hora_programada: hora,
            hora_real: hora_tt,
            target,
            motivo,
        },
    };

    Ok(Reporte {
        id: backend.id,
        filial_id,
        programa_id,
        fecha,
        resultado,
        observaciones: backend.observaciones.filter(|o| !o.trim().is_empty()),
        created_at: parse_timestamp(backend.created_at.as_deref()),
        updated_at: parse_timestamp(backend.update_at.as_deref()),
    })
}

/// 批量转换，跳过无法转换的记录（记录 warn）
pub fn reportes_from_backend(backend: Vec<ReporteBackend>) -> Vec<Reporte> {
    backend
        .into_iter()
        .filter_map(|r| {
            let id = r.id;
            match reporte_from_backend(r) {
                Ok(reporte) => Some(reporte),
                Err(e) => {
                    tracing::warn!(reporte_id = ?id, error = %e, "跳过无法转换的报告");
                    None
                }
            }
        })
        .collect()
}

// ==========================================
// 出站报文（本系统 → 后端）
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilialPayload {
    pub nombre: String,
    pub is_activo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramaPayload {
    pub nombre: String,
    pub is_activo: bool,
    pub dias_semana: Vec<String>,
    pub hora_inicio: HoraBackend,
}

/// 节目-分台关联报文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilialesPayload {
    pub filial_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub fecha: String,
    pub estado_transmision: String,
    pub filial_id: i64,
    pub programa_id: i64,
    // 状态相关字段始终输出（含 null），后端按字段覆盖时才能清除旧值
    pub target: Option<String>,
    pub motivo: Option<String>,
    pub hora: Option<HoraBackend>,
    #[serde(rename = "hora_tt")]
    pub hora_tt: Option<HoraBackend>,
    pub observaciones: Option<String>,
}

pub fn filial_payload(input: &FilialInput) -> FilialPayload {
    FilialPayload {
        nombre: input.nombre.trim().to_string(),
        is_activo: input.is_activo,
    }
}

/// 组装节目报文
///
/// # 规则
/// - 星期严格解析；空列表回退为周一至周五
/// - 开播时间严格解析；未给出时使用 08:00
pub fn programa_payload(input: &ProgramaInput) -> AdapterResult<ProgramaPayload> {
    let mut dias: Vec<DiaSemana> = input
        .dias_semana
        .iter()
        .map(|d| DiaSemana::parse(d))
        .collect::<AdapterResult<Vec<_>>>()?;
    if dias.is_empty() {
        dias = DiaSemana::LABORALES.to_vec();
    }
    dias.sort();
    dias.dedup();

    let hora_texto = input
        .hora_inicio
        .as_deref()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or(HORA_INICIO_DEFAULT);

    Ok(ProgramaPayload {
        nombre: input.nombre.trim().to_string(),
        is_activo: input.is_activo,
        dias_semana: dias.iter().map(|d| d.token().to_string()).collect(),
        hora_inicio: parse_hora(hora_texto)?,
    })
}

fn hora_opcional(hora: Option<&str>) -> AdapterResult<Option<HoraBackend>> {
    match hora.map(str::trim).filter(|h| !h.is_empty()) {
        Some(h) => parse_hora(h).map(Some),
        None => Ok(None),
    }
}

/// 组装报告报文（target 转为后端全称）
pub fn reporte_payload(reporte: &Reporte) -> AdapterResult<ReportePayload> {
    let (target, motivo, hora, hora_tt) = match &reporte.resultado {
        ResultadoTransmision::Pendiente => (None, None, None, None),
        ResultadoTransmision::Si { hora_real } => (None, None, hora_opcional(hora_real.as_deref())?, None),
        ResultadoTransmision::No { target, motivo } => (
            target.as_deref().map(to_backend),
            motivo_efectivo(target.as_deref(), motivo.as_deref()),
            None,
            None,
        ),
        ResultadoTransmision::Tarde {
            hora_programada,
            hora_real,
            target,
            motivo,
        } => (
            target.as_deref().map(to_backend),
            motivo_efectivo(target.as_deref(), motivo.as_deref()),
            hora_opcional(hora_programada.as_deref())?,
            hora_opcional(hora_real.as_deref())?,
        ),
    };

    Ok(ReportePayload {
        id: reporte.id,
        fecha: fecha_iso(reporte.fecha),
        estado_transmision: reporte.estado().backend_str().to_string(),
        filial_id: reporte.filial_id,
        programa_id: reporte.programa_id,
        target,
        motivo,
        hora,
        hora_tt,
        observaciones: reporte.observaciones.clone(),
    })
}
