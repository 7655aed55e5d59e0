// ==========================================
// 传输监控系统 - 内存网关
// ==========================================
// 职责: 进程内实现 TransmisionGateway，供测试与演示使用
// 行为与后端保持一致: 自增 id、星期默认周一至周五、报告列表按区间过滤
// ==========================================

use crate::adapter::time_codec::hora_to_string;
use crate::adapter::wire::{programa_payload, reporte_payload};
use crate::api::error::{ApiError, ApiResult};
use crate::api::gateway::TransmisionGateway;
use crate::domain::filial::{Filial, FilialInput};
use crate::domain::programa::{Programa, ProgramaInput};
use crate::domain::reporte::Reporte;
use crate::engine::status_grid::RangoFechas;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Estado {
    filiales: Vec<Filial>,
    programas: Vec<Programa>,
    reportes: Vec<Reporte>,
    siguiente_id: i64,
}

impl Estado {
    fn nuevo_id(&mut self) -> i64 {
        self.siguiente_id += 1;
        self.siguiente_id
    }
}

#[derive(Debug, Default)]
pub struct MemoryGateway {
    estado: Mutex<Estado>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以现成数据初始化（id 原样保留）
    pub fn con_datos(filiales: Vec<Filial>, programas: Vec<Programa>, reportes: Vec<Reporte>) -> Self {
        let max_id = filiales
            .iter()
            .map(|f| f.id)
            .chain(programas.iter().map(|p| p.id))
            .chain(reportes.iter().filter_map(|r| r.id))
            .max()
            .unwrap_or(0);
        Self {
            estado: Mutex::new(Estado {
                filiales,
                programas,
                reportes,
                siguiente_id: max_id,
            }),
        }
    }

    /// 当前全部报告（测试断言用）
    pub fn reportes(&self) -> ApiResult<Vec<Reporte>> {
        Ok(self.lock()?.reportes.clone())
    }

    fn lock(&self) -> ApiResult<MutexGuard<'_, Estado>> {
        self.estado
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }

    fn programa_desde_input(id: i64, input: &ProgramaInput) -> ApiResult<Programa> {
        let payload = programa_payload(input)?;
        Ok(Programa {
            id,
            nombre: payload.nombre,
            is_activo: payload.is_activo,
            hora_inicio: hora_to_string(&payload.hora_inicio),
            dias_semana: payload.dias_semana,
            filiales_ids: input.filiales_ids.clone(),
        })
    }
}

#[async_trait]
impl TransmisionGateway for MemoryGateway {
    async fn listar_filiales(&self) -> ApiResult<Vec<Filial>> {
        Ok(self.lock()?.filiales.clone())
    }

    async fn obtener_filial(&self, id: i64) -> ApiResult<Filial> {
        self.lock()?
            .filiales
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Filial(id={})不存在", id)))
    }

    async fn crear_filial(&self, input: &FilialInput) -> ApiResult<Filial> {
        let mut estado = self.lock()?;
        let id = estado.nuevo_id();
        let filial = Filial {
            id,
            nombre: input.nombre.trim().to_string(),
            is_activo: input.is_activo,
            programa_ids: Vec::new(),
        };
        estado.filiales.push(filial.clone());
        Ok(filial)
    }

    async fn actualizar_filial(&self, id: i64, input: &FilialInput) -> ApiResult<Filial> {
        let mut estado = self.lock()?;
        let filial = estado
            .filiales
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Filial(id={})不存在", id)))?;
        filial.nombre = input.nombre.trim().to_string();
        filial.is_activo = input.is_activo;
        Ok(filial.clone())
    }

    async fn eliminar_filial(&self, id: i64) -> ApiResult<()> {
        let mut estado = self.lock()?;
        let antes = estado.filiales.len();
        estado.filiales.retain(|f| f.id != id);
        if estado.filiales.len() == antes {
            return Err(ApiError::NotFound(format!("Filial(id={})不存在", id)));
        }
        Ok(())
    }

    async fn listar_programas(&self) -> ApiResult<Vec<Programa>> {
        Ok(self.lock()?.programas.clone())
    }

    async fn obtener_programa(&self, id: i64) -> ApiResult<Programa> {
        self.lock()?
            .programas
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Programa(id={})不存在", id)))
    }

    async fn crear_programa(&self, input: &ProgramaInput) -> ApiResult<Programa> {
        let mut estado = self.lock()?;
        let id = estado.nuevo_id();
        let programa = Self::programa_desde_input(id, input)?;
        estado.programas.push(programa.clone());
        Ok(programa)
    }

    async fn actualizar_programa(&self, id: i64, input: &ProgramaInput) -> ApiResult<Programa> {
        let mut estado = self.lock()?;
        let actual = estado
            .programas
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Programa(id={})不存在", id)))?;
        let mut nuevo = Self::programa_desde_input(id, input)?;
        if nuevo.filiales_ids.is_empty() {
            nuevo.filiales_ids = actual.filiales_ids.clone();
        }
        *actual = nuevo.clone();
        Ok(nuevo)
    }

    async fn eliminar_programa(&self, id: i64) -> ApiResult<()> {
        let mut estado = self.lock()?;
        let antes = estado.programas.len();
        estado.programas.retain(|p| p.id != id);
        if estado.programas.len() == antes {
            return Err(ApiError::NotFound(format!("Programa(id={})不存在", id)));
        }
        Ok(())
    }

    async fn asignar_filiales(&self, programa_id: i64, filial_ids: &[i64]) -> ApiResult<Programa> {
        let mut estado = self.lock()?;
        let programa = estado
            .programas
            .iter_mut()
            .find(|p| p.id == programa_id)
            .ok_or_else(|| ApiError::NotFound(format!("Programa(id={})不存在", programa_id)))?;
        programa.filiales_ids = filial_ids.to_vec();
        Ok(programa.clone())
    }

    async fn listar_reportes(&self, rango: &RangoFechas) -> ApiResult<Vec<Reporte>> {
        Ok(self
            .lock()?
            .reportes
            .iter()
            .filter(|r| rango.contiene(r.fecha))
            .cloned()
            .collect())
    }

    async fn crear_reporte(&self, reporte: &Reporte) -> ApiResult<Reporte> {
        reporte_payload(reporte)?;
        let mut estado = self.lock()?;
        let mut nuevo = reporte.clone();
        nuevo.id = Some(estado.nuevo_id());
        let ahora = Utc::now();
        nuevo.created_at = Some(ahora);
        nuevo.updated_at = Some(ahora);
        estado.reportes.push(nuevo.clone());
        Ok(nuevo)
    }

    async fn actualizar_reporte(&self, id: i64, reporte: &Reporte) -> ApiResult<Reporte> {
        reporte_payload(reporte)?;
        let mut estado = self.lock()?;
        let actual = estado
            .reportes
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| ApiError::NotFound(format!("Reporte(id={})不存在", id)))?;
        let created_at = actual.created_at;
        *actual = Reporte {
            id: Some(id),
            created_at,
            updated_at: Some(Utc::now()),
            ..reporte.clone()
        };
        Ok(actual.clone())
    }

    async fn eliminar_reporte(&self, id: i64) -> ApiResult<()> {
        let mut estado = self.lock()?;
        let antes = estado.reportes.len();
        estado.reportes.retain(|r| r.id != Some(id));
        if estado.reportes.len() == antes {
            return Err(ApiError::NotFound(format!("Reporte(id={})不存在", id)));
        }
        Ok(())
    }
}
