// ==========================================
// 传输监控系统 - 传输监控 API
// ==========================================
// 职责: 组合网关与引擎，提供网格加载、汇总、填报和基础数据维护
// 红线: 业务判断全部在引擎/校验器中完成，本层只做编排
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::instrument;

use crate::api::error::{ApiError, ApiResult};
use crate::api::gateway::TransmisionGateway;
use crate::api::validator::{EnvioReporte, ReportSubmissionValidator};
use crate::domain::filial::{Filial, FilialInput};
use crate::domain::grid::CeldaGrid;
use crate::domain::programa::{Programa, ProgramaInput};
use crate::domain::reporte::Reporte;
use crate::domain::types::EstadoTransmision;
use crate::engine::report_resolver::ReportResolver;
use crate::engine::schedule_matcher::ScheduleMatcher;
use crate::engine::status_grid::{RangoFechas, StatusGridBuilder};
use crate::engine::summary::{ResumenDia, ResumenSemanal, SummaryBuilder};

/// 分台的状态网格
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridFilial {
    pub filial: Filial,
    /// 关联到分台的节目（网格行）
    pub programas: Vec<Programa>,
    pub rango: RangoFechas,
    pub celdas: Vec<CeldaGrid>,
}

// ==========================================
// ControlApi
// ==========================================
pub struct ControlApi {
    gateway: Arc<dyn TransmisionGateway>,
}

impl ControlApi {
    pub fn new(gateway: Arc<dyn TransmisionGateway>) -> Self {
        Self { gateway }
    }

    // ==========================================
    // 网格与汇总
    // ==========================================

    /// 加载分台在区间内的状态网格
    ///
    /// 分台、节目、报告三次请求并发执行
    #[instrument(skip(self), fields(inicio = %rango.inicio(), fin = %rango.fin()))]
    pub async fn cargar_grid(&self, filial_id: i64, rango: RangoFechas) -> ApiResult<GridFilial> {
        let (filial, programas, reportes) = futures::try_join!(
            self.gateway.obtener_filial(filial_id),
            self.gateway.listar_programas(),
            self.gateway.listar_reportes(&rango),
        )?;

        let celdas = StatusGridBuilder::build_grid(&filial, &programas, &reportes, &rango);
        let programas = ScheduleMatcher::programas_de_filial(&filial, &programas)
            .into_iter()
            .cloned()
            .collect();

        Ok(GridFilial {
            filial,
            programas,
            rango,
            celdas,
        })
    }

    /// 包含该日期的一周汇总
    pub async fn resumen_semanal(&self, filial_id: i64, fecha: NaiveDate) -> ApiResult<ResumenSemanal> {
        let rango = RangoFechas::semana_de(fecha);
        let grid = self.cargar_grid(filial_id, rango).await?;
        Ok(SummaryBuilder::resumen(filial_id, &grid.celdas, &rango))
    }

    /// 单日视图
    pub async fn reportes_por_fecha(&self, filial_id: i64, fecha: NaiveDate) -> ApiResult<ResumenDia> {
        let rango = RangoFechas::new(fecha, fecha)?;
        let grid = self.cargar_grid(filial_id, rango).await?;
        Ok(SummaryBuilder::resumen_dia(&grid.celdas, fecha))
    }

    // ==========================================
    // 填报
    // ==========================================

    /// 保存一次填报
    ///
    /// # 规则
    /// - 节目必须关联到分台
    /// - 校验规则见 ReportSubmissionValidator
    /// - 未带 id 时先按自然键查找已有报告，存在则更新，避免重复
    #[instrument(skip(self, envio), fields(
        filial_id = envio.filial_id,
        programa_id = envio.programa_id,
        fecha = %envio.fecha,
        estado = %envio.estado,
    ))]
    pub async fn guardar_reporte(&self, envio: &EnvioReporte) -> ApiResult<Reporte> {
        let (filial, programa) = futures::try_join!(
            self.gateway.obtener_filial(envio.filial_id),
            self.gateway.obtener_programa(envio.programa_id),
        )?;

        if !ScheduleMatcher::programa_asociado(&filial, &programa) {
            return Err(ApiError::InvalidInput(format!(
                "节目(id={})未关联到分台(id={})",
                programa.id, filial.id
            )));
        }

        let mut reporte = ReportSubmissionValidator::validar(envio, &programa)?;

        if reporte.id.is_none() {
            let rango = RangoFechas::new(envio.fecha, envio.fecha)?;
            let existentes = self.gateway.listar_reportes(&rango).await?;
            reporte.id = ReportResolver::find_report(&existentes, &reporte.key())
                .reporte()
                .and_then(|r| r.id);
        }

        let guardado = match reporte.id {
            Some(id) => self.gateway.actualizar_reporte(id, &reporte).await?,
            None => self.gateway.crear_reporte(&reporte).await?,
        };
        tracing::info!(reporte_id = ?guardado.id, "报告已保存");
        Ok(guardado)
    }

    /// 将格子恢复为待填报
    pub async fn limpiar_reporte(
        &self,
        filial_id: i64,
        programa_id: i64,
        fecha: NaiveDate,
    ) -> ApiResult<Reporte> {
        let envio = EnvioReporte::new(filial_id, programa_id, fecha, EstadoTransmision::Pendiente);
        self.guardar_reporte(&envio).await
    }

    pub async fn eliminar_reporte(&self, id: i64) -> ApiResult<()> {
        self.gateway.eliminar_reporte(id).await
    }

    // ==========================================
    // 分台维护
    // ==========================================

    pub async fn listar_filiales(&self) -> ApiResult<Vec<Filial>> {
        self.gateway.listar_filiales().await
    }

    /// 启用中的分台
    pub async fn listar_filiales_activas(&self) -> ApiResult<Vec<Filial>> {
        let filiales = self.gateway.listar_filiales().await?;
        Ok(filiales.into_iter().filter(|f| f.is_activo).collect())
    }

    pub async fn obtener_filial(&self, id: i64) -> ApiResult<Filial> {
        self.gateway.obtener_filial(id).await
    }

    pub async fn crear_filial(&self, input: &FilialInput) -> ApiResult<Filial> {
        ReportSubmissionValidator::validar_filial(input)?;
        self.gateway.crear_filial(input).await
    }

    pub async fn actualizar_filial(&self, id: i64, input: &FilialInput) -> ApiResult<Filial> {
        ReportSubmissionValidator::validar_filial(input)?;
        self.gateway.actualizar_filial(id, input).await
    }

    pub async fn eliminar_filial(&self, id: i64) -> ApiResult<()> {
        self.gateway.eliminar_filial(id).await
    }

    // ==========================================
    // 节目维护
    // ==========================================

    pub async fn listar_programas(&self) -> ApiResult<Vec<Programa>> {
        self.gateway.listar_programas().await
    }

    /// 分台关联的节目
    pub async fn programas_de_filial(&self, filial_id: i64) -> ApiResult<Vec<Programa>> {
        let (filial, programas) = futures::try_join!(
            self.gateway.obtener_filial(filial_id),
            self.gateway.listar_programas(),
        )?;
        Ok(ScheduleMatcher::programas_de_filial(&filial, &programas)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn obtener_programa(&self, id: i64) -> ApiResult<Programa> {
        self.gateway.obtener_programa(id).await
    }

    pub async fn crear_programa(&self, input: &ProgramaInput) -> ApiResult<Programa> {
        ReportSubmissionValidator::validar_programa(input)?;
        self.gateway.crear_programa(input).await
    }

    /// 更新节目；filiales_ids 为空时保留原有关联（清空走 asignar_filiales）
    pub async fn actualizar_programa(&self, id: i64, input: &ProgramaInput) -> ApiResult<Programa> {
        ReportSubmissionValidator::validar_programa(input)?;
        self.gateway.actualizar_programa(id, input).await
    }

    pub async fn eliminar_programa(&self, id: i64) -> ApiResult<()> {
        self.gateway.eliminar_programa(id).await
    }

    pub async fn asignar_filiales(&self, programa_id: i64, filial_ids: &[i64]) -> ApiResult<Programa> {
        self.gateway.asignar_filiales(programa_id, filial_ids).await
    }
}
