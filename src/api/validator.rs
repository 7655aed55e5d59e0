// ==========================================
// 传输监控系统 - 报告填报校验器
// ==========================================
// 职责: 人工填报的格子状态转换校验，组装待提交的 Reporte
// 红线: 不播出的格子（NoProgramado）不接受任何填报
// ==========================================

use crate::adapter::target_mapper::{motivo_efectivo, TargetCode};
use crate::adapter::time_codec::normalizar_hhmm;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::filial::FilialInput;
use crate::domain::programa::{Programa, ProgramaInput};
use crate::domain::reporte::{Reporte, ResultadoTransmision};
use crate::domain::types::{EstadoCelda, EstadoTransmision};
use crate::engine::schedule_matcher::ScheduleMatcher;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// EnvioReporte - 一次填报
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvioReporte {
    /// 已有报告的 id（有则更新，无则新建）
    #[serde(default)]
    pub id: Option<i64>,
    pub filial_id: i64,
    pub programa_id: i64,
    pub fecha: NaiveDate,
    pub estado: EstadoTransmision,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub motivo: Option<String>,
    /// Si: 实际播出时间；Tarde: 迟播时间
    #[serde(default)]
    pub hora_real: Option<String>,
    /// Tarde: 计划时间（缺省取节目开播时间）
    #[serde(default)]
    pub hora_programada: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

impl EnvioReporte {
    pub fn new(filial_id: i64, programa_id: i64, fecha: NaiveDate, estado: EstadoTransmision) -> Self {
        Self {
            id: None,
            filial_id,
            programa_id,
            fecha,
            estado,
            target: None,
            motivo: None,
            hora_real: None,
            hora_programada: None,
            observaciones: None,
        }
    }

    pub fn con_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn con_motivo(mut self, motivo: impl Into<String>) -> Self {
        self.motivo = Some(motivo.into());
        self
    }

    pub fn con_hora_real(mut self, hora: impl Into<String>) -> Self {
        self.hora_real = Some(hora.into());
        self
    }
}

fn texto(valor: Option<&str>) -> Option<&str> {
    valor.map(str::trim).filter(|v| !v.is_empty())
}

// ==========================================
// ReportSubmissionValidator
// ==========================================
pub struct ReportSubmissionValidator;

impl ReportSubmissionValidator {
    /// 校验填报并组装 Reporte
    ///
    /// # 规则
    /// - 节目当天不播出 → InvalidStateTransition
    /// - pendiente: 清空全部状态字段
    /// - si: 实际时间可选，给出时严格解析
    /// - no / tarde: 原因代码必须属于该状态的词表；Otros 必须填写 motivo
    /// - tarde: 迟播时间必填
    /// - 非 Otros 代码丢弃 motivo
    pub fn validar(envio: &EnvioReporte, programa: &Programa) -> ApiResult<Reporte> {
        if programa.id != envio.programa_id {
            return Err(ApiError::InvalidInput(format!(
                "节目不匹配: envio={}, programa={}",
                envio.programa_id, programa.id
            )));
        }

        if !ScheduleMatcher::is_scheduled(programa, envio.fecha) {
            return Err(ApiError::InvalidStateTransition {
                from: EstadoCelda::NoProgramado.to_string(),
                to: EstadoCelda::from(envio.estado).to_string(),
            });
        }

        let resultado = match envio.estado {
            EstadoTransmision::Pendiente => ResultadoTransmision::Pendiente,
            EstadoTransmision::Si => ResultadoTransmision::Si {
                hora_real: Self::hora_opcional(envio.hora_real.as_deref())?,
            },
            EstadoTransmision::No => {
                let target = Self::target_requerido(envio, EstadoTransmision::No)?;
                ResultadoTransmision::No {
                    motivo: motivo_efectivo(Some(target.abbr()), envio.motivo.as_deref()),
                    target: Some(target.abbr().to_string()),
                }
            }
            EstadoTransmision::Tarde => {
                let target = Self::target_requerido(envio, EstadoTransmision::Tarde)?;
                let hora_real = Self::hora_opcional(envio.hora_real.as_deref())?
                    .ok_or_else(|| ApiError::ValidationError("迟播必须填写实际播出时间".to_string()))?;
                let hora_programada = match Self::hora_opcional(envio.hora_programada.as_deref())? {
                    Some(h) => Some(h),
                    None => texto(Some(programa.hora_inicio.as_str())).map(str::to_string),
                };
                ResultadoTransmision::Tarde {
                    hora_programada,
                    hora_real: Some(hora_real),
                    motivo: motivo_efectivo(Some(target.abbr()), envio.motivo.as_deref()),
                    target: Some(target.abbr().to_string()),
                }
            }
        };

        // Pendiente 不保留备注
        let observaciones = match envio.estado {
            EstadoTransmision::Pendiente => None,
            _ => texto(envio.observaciones.as_deref()).map(str::to_string),
        };

        Ok(Reporte {
            id: envio.id,
            observaciones,
            ..Reporte::new(envio.filial_id, envio.programa_id, envio.fecha, resultado)
        })
    }

    fn hora_opcional(hora: Option<&str>) -> ApiResult<Option<String>> {
        match texto(hora) {
            Some(h) => Ok(Some(normalizar_hhmm(h)?)),
            None => Ok(None),
        }
    }

    fn target_requerido(envio: &EnvioReporte, estado: EstadoTransmision) -> ApiResult<TargetCode> {
        let crudo = texto(envio.target.as_deref())
            .ok_or_else(|| ApiError::ValidationError(format!("状态 {} 必须选择原因代码", estado)))?;
        let target = TargetCode::parse(crudo)
            .filter(|t| TargetCode::permitidos(estado).contains(t))
            .ok_or_else(|| {
                ApiError::ValidationError(format!("原因代码 {} 不适用于状态 {}", crudo, estado))
            })?;
        if target.requiere_motivo() && texto(envio.motivo.as_deref()).is_none() {
            return Err(ApiError::ValidationError("原因为 Otros 时必须填写说明".to_string()));
        }
        Ok(target)
    }

    /// 分台输入校验
    pub fn validar_filial(input: &FilialInput) -> ApiResult<()> {
        if input.nombre.trim().is_empty() {
            return Err(ApiError::InvalidInput("分台名称不能为空".to_string()));
        }
        Ok(())
    }

    /// 节目输入校验（星期/时间的严格解析在报文组装时进行）
    pub fn validar_programa(input: &ProgramaInput) -> ApiResult<()> {
        if input.nombre.trim().is_empty() {
            return Err(ApiError::InvalidInput("节目名称不能为空".to_string()));
        }
        if let Some(hora) = texto(input.hora_inicio.as_deref()) {
            normalizar_hhmm(hora)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::DiaSemana;

    fn programa() -> Programa {
        Programa::new(10, "Noticiero", "08:00")
            .con_dias(&DiaSemana::LABORALES)
            .con_filiales(&[1])
    }

    fn miercoles() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    #[test]
    fn test_unscheduled_date_rejected() {
        let sabado = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let envio = EnvioReporte::new(1, 10, sabado, EstadoTransmision::Si);
        match ReportSubmissionValidator::validar(&envio, &programa()) {
            Err(ApiError::InvalidStateTransition { from, to }) => {
                assert_eq!(from, "NO_PROGRAMADO");
                assert_eq!(to, "SI");
            }
            other => panic!("期望 InvalidStateTransition, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_late_with_otros_keeps_motivo_and_program_time() {
        let envio = EnvioReporte::new(1, 10, miercoles(), EstadoTransmision::Tarde)
            .con_target("Otros")
            .con_motivo("Corte de luz")
            .con_hora_real("8:25");
        let reporte = ReportSubmissionValidator::validar(&envio, &programa()).unwrap();
        assert_eq!(
            reporte.resultado,
            ResultadoTransmision::Tarde {
                hora_programada: Some("08:00".to_string()),
                hora_real: Some("08:25".to_string()),
                target: Some("Otros".to_string()),
                motivo: Some("Corte de luz".to_string()),
            }
        );
    }

    #[test]
    fn test_backend_code_accepted_and_stored_as_abbreviation() {
        let envio = EnvioReporte::new(1, 10, miercoles(), EstadoTransmision::No)
            .con_target("Enfermedad")
            .con_motivo("ignorado");
        let reporte = ReportSubmissionValidator::validar(&envio, &programa()).unwrap();
        assert_eq!(
            reporte.resultado,
            ResultadoTransmision::No {
                target: Some("Enf".to_string()),
                motivo: None,
            }
        );
    }

    #[test]
    fn test_code_outside_vocabulary_rejected() {
        // Tde 只适用于迟播
        let envio = EnvioReporte::new(1, 10, miercoles(), EstadoTransmision::No).con_target("Tde");
        assert!(matches!(
            ReportSubmissionValidator::validar(&envio, &programa()),
            Err(ApiError::ValidationError(_))
        ));

        let sin_codigo = EnvioReporte::new(1, 10, miercoles(), EstadoTransmision::No);
        assert!(ReportSubmissionValidator::validar(&sin_codigo, &programa()).is_err());
    }

    #[test]
    fn test_otros_requires_motivo() {
        let envio = EnvioReporte::new(1, 10, miercoles(), EstadoTransmision::No)
            .con_target("Otros")
            .con_motivo("   ");
        assert!(matches!(
            ReportSubmissionValidator::validar(&envio, &programa()),
            Err(ApiError::ValidationError(_))
        ));
    }

    #[test]
    fn test_late_requires_valid_time() {
        let sin_hora = EnvioReporte::new(1, 10, miercoles(), EstadoTransmision::Tarde).con_target("Tde");
        assert!(ReportSubmissionValidator::validar(&sin_hora, &programa()).is_err());

        let mala = sin_hora.clone().con_hora_real("25:00");
        assert!(matches!(
            ReportSubmissionValidator::validar(&mala, &programa()),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_pending_clears_everything() {
        let mut envio = EnvioReporte::new(1, 10, miercoles(), EstadoTransmision::Pendiente)
            .con_target("Fta")
            .con_motivo("x")
            .con_hora_real("08:00");
        envio.observaciones = Some("nota".to_string());
        envio.id = Some(4);
        let reporte = ReportSubmissionValidator::validar(&envio, &programa()).unwrap();
        assert_eq!(reporte.resultado, ResultadoTransmision::Pendiente);
        assert_eq!(reporte.observaciones, None);
        assert_eq!(reporte.id, Some(4));
    }

    #[test]
    fn test_program_input_validation() {
        let mut input = ProgramaInput {
            nombre: "  ".to_string(),
            is_activo: true,
            dias_semana: Vec::new(),
            hora_inicio: None,
            filiales_ids: Vec::new(),
        };
        assert!(ReportSubmissionValidator::validar_programa(&input).is_err());
        input.nombre = "Matinal".to_string();
        input.hora_inicio = Some("6:3x".to_string());
        assert!(ReportSubmissionValidator::validar_programa(&input).is_err());
        input.hora_inicio = Some("06:30".to_string());
        assert!(ReportSubmissionValidator::validar_programa(&input).is_ok());
    }
}
