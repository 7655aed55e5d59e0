// ==========================================
// 传输监控系统 - 后端网关 Trait
// ==========================================
// 职责: 定义分台/节目/报告的数据访问接口（不包含业务逻辑）
// 红线: 网关只做数据 CRUD 与报文转换，校验在 ControlApi
// 实现者: HttpGateway（reqwest）、MemoryGateway（测试/演示）
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::filial::{Filial, FilialInput};
use crate::domain::programa::{Programa, ProgramaInput};
use crate::domain::reporte::Reporte;
use crate::engine::status_grid::RangoFechas;
use async_trait::async_trait;

#[async_trait]
pub trait TransmisionGateway: Send + Sync {
    // ===== 分台 =====

    async fn listar_filiales(&self) -> ApiResult<Vec<Filial>>;

    /// # 返回
    /// - Err(NotFound): 分台不存在
    async fn obtener_filial(&self, id: i64) -> ApiResult<Filial>;

    async fn crear_filial(&self, input: &FilialInput) -> ApiResult<Filial>;

    async fn actualizar_filial(&self, id: i64, input: &FilialInput) -> ApiResult<Filial>;

    async fn eliminar_filial(&self, id: i64) -> ApiResult<()>;

    // ===== 节目 =====

    async fn listar_programas(&self) -> ApiResult<Vec<Programa>>;

    async fn obtener_programa(&self, id: i64) -> ApiResult<Programa>;

    /// 输入已经过校验；星期为空时由实现方补全为周一至周五
    async fn crear_programa(&self, input: &ProgramaInput) -> ApiResult<Programa>;

    /// filiales_ids 为空时保留原有关联，不做清空
    async fn actualizar_programa(&self, id: i64, input: &ProgramaInput) -> ApiResult<Programa>;

    async fn eliminar_programa(&self, id: i64) -> ApiResult<()>;

    /// 覆盖节目的分台关联；空切片清空全部关联
    async fn asignar_filiales(&self, programa_id: i64, filial_ids: &[i64]) -> ApiResult<Programa>;

    // ===== 报告 =====

    /// 区间内的全部报告（后端 404 视为空列表）
    async fn listar_reportes(&self, rango: &RangoFechas) -> ApiResult<Vec<Reporte>>;

    async fn crear_reporte(&self, reporte: &Reporte) -> ApiResult<Reporte>;

    async fn actualizar_reporte(&self, id: i64, reporte: &Reporte) -> ApiResult<Reporte>;

    async fn eliminar_reporte(&self, id: i64) -> ApiResult<()>;
}
