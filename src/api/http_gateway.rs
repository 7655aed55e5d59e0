// ==========================================
// 传输监控系统 - HTTP 网关（reqwest）
// ==========================================
// 职责: 调用后端 REST 接口，负责报文转换
// 约定: 单次请求超时（默认 10s），不重试
//       报告列表 404 视为空列表；其余 404 → NotFound
// ==========================================

use crate::adapter::date_format::fecha_iso;
use crate::adapter::wire::{
    filial_from_backend, filial_payload, programa_from_backend, programa_payload,
    reporte_from_backend, reporte_payload, reportes_from_backend, FilialBackend,
    FilialesPayload, ProgramaBackend, ReporteBackend,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::gateway::TransmisionGateway;
use crate::config::AppConfig;
use crate::domain::filial::{Filial, FilialInput};
use crate::domain::programa::{Programa, ProgramaInput};
use crate::domain::reporte::Reporte;
use crate::engine::status_grid::RangoFechas;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// /reporte/add 可能返回单个对象或数组
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UnoOVarios<T> {
    Varios(Vec<T>),
    Uno(T),
}

impl<T> UnoOVarios<T> {
    fn primero(self) -> Option<T> {
        match self {
            UnoOVarios::Varios(v) => v.into_iter().next(),
            UnoOVarios::Uno(t) => Some(t),
        }
    }
}

pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// # 参数
    /// - base_url: 后端地址，如 http://localhost:8080
    /// - timeout: 单次请求超时
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        Self::new(config.api_url.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 发送请求并解析 JSON；404 → NotFound
    async fn enviar<T: DeserializeOwned>(&self, request: RequestBuilder, recurso: &str) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(recurso, status = status.as_u16(), "后端响应");
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(recurso.to_string()));
        }
        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// 发送请求，忽略响应体
    async fn enviar_sin_cuerpo(&self, request: RequestBuilder, recurso: &str) -> ApiResult<()> {
        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(recurso.to_string()));
        }
        response.error_for_status()?;
        Ok(())
    }

    /// 列表接口: 404 → 空列表
    async fn listar<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        match self.enviar(self.client.get(self.url(path)), path).await {
            Err(ApiError::NotFound(_)) => {
                tracing::debug!(path, "列表接口返回 404，按空列表处理");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

#[async_trait]
impl TransmisionGateway for HttpGateway {
    async fn listar_filiales(&self) -> ApiResult<Vec<Filial>> {
        let backend: Vec<FilialBackend> = self.listar("/filial/listar").await?;
        Ok(backend.into_iter().map(filial_from_backend).collect())
    }

    async fn obtener_filial(&self, id: i64) -> ApiResult<Filial> {
        let path = format!("/filial/{}", id);
        let backend: FilialBackend = self.enviar(self.client.get(self.url(&path)), &path).await?;
        Ok(filial_from_backend(backend))
    }

    async fn crear_filial(&self, input: &FilialInput) -> ApiResult<Filial> {
        let request = self.client.post(self.url("/filial")).json(&filial_payload(input));
        let backend: FilialBackend = self.enviar(request, "/filial").await?;
        tracing::info!(filial_id = backend.id, "分台已创建");
        Ok(filial_from_backend(backend))
    }

    async fn actualizar_filial(&self, id: i64, input: &FilialInput) -> ApiResult<Filial> {
        let path = format!("/filial/{}", id);
        let request = self.client.put(self.url(&path)).json(&filial_payload(input));
        let backend: FilialBackend = self.enviar(request, &path).await?;
        Ok(filial_from_backend(backend))
    }

    async fn eliminar_filial(&self, id: i64) -> ApiResult<()> {
        let path = format!("/filial/{}", id);
        self.enviar_sin_cuerpo(self.client.delete(self.url(&path)), &path).await
    }

    async fn listar_programas(&self) -> ApiResult<Vec<Programa>> {
        let backend: Vec<ProgramaBackend> = self.listar("/programa/listar").await?;
        Ok(backend.into_iter().map(programa_from_backend).collect())
    }

    async fn obtener_programa(&self, id: i64) -> ApiResult<Programa> {
        let path = format!("/programa/{}", id);
        let backend: ProgramaBackend = self.enviar(self.client.get(self.url(&path)), &path).await?;
        Ok(programa_from_backend(backend))
    }

    async fn crear_programa(&self, input: &ProgramaInput) -> ApiResult<Programa> {
        let payload = programa_payload(input)?;
        let request = self.client.post(self.url("/programa")).json(&payload);
        let backend: ProgramaBackend = self.enviar(request, "/programa").await?;
        let programa = programa_from_backend(backend);
        tracing::info!(programa_id = programa.id, "节目已创建");

        // 关联关系走独立接口
        if input.filiales_ids.is_empty() {
            Ok(programa)
        } else {
            self.asignar_filiales(programa.id, &input.filiales_ids).await
        }
    }

    async fn actualizar_programa(&self, id: i64, input: &ProgramaInput) -> ApiResult<Programa> {
        let path = format!("/programa/{}", id);
        let payload = programa_payload(input)?;
        let request = self.client.put(self.url(&path)).json(&payload);
        let backend: ProgramaBackend = self.enviar(request, &path).await?;
        let programa = programa_from_backend(backend);

        if input.filiales_ids.is_empty() {
            Ok(programa)
        } else {
            self.asignar_filiales(id, &input.filiales_ids).await
        }
    }

    async fn eliminar_programa(&self, id: i64) -> ApiResult<()> {
        let path = format!("/programa/{}", id);
        self.enviar_sin_cuerpo(self.client.delete(self.url(&path)), &path).await
    }

    async fn asignar_filiales(&self, programa_id: i64, filial_ids: &[i64]) -> ApiResult<Programa> {
        let path = format!("/programa/{}/filiales", programa_id);
        let payload = FilialesPayload {
            filial_ids: filial_ids.to_vec(),
        };
        let request = self.client.put(self.url(&path)).json(&payload);
        let backend: ProgramaBackend = self.enviar(request, &path).await?;
        Ok(programa_from_backend(backend))
    }

    async fn listar_reportes(&self, rango: &RangoFechas) -> ApiResult<Vec<Reporte>> {
        let path = format!(
            "/reporte/rango?fechaInicio={}&fechaFin={}",
            fecha_iso(rango.inicio()),
            fecha_iso(rango.fin())
        );
        let backend: Vec<ReporteBackend> = self.listar(&path).await?;
        let total = backend.len();
        let reportes = reportes_from_backend(backend);
        tracing::debug!(total, validos = reportes.len(), "报告已加载");
        Ok(reportes)
    }

    async fn crear_reporte(&self, reporte: &Reporte) -> ApiResult<Reporte> {
        let payload = reporte_payload(reporte)?;
        let request = self.client.post(self.url("/reporte/add")).json(&vec![payload]);
        let respuesta: UnoOVarios<ReporteBackend> = self.enviar(request, "/reporte/add").await?;
        let backend = respuesta
            .primero()
            .ok_or_else(|| ApiError::GatewayError("/reporte/add 返回空数组".to_string()))?;
        Ok(reporte_from_backend(backend)?)
    }

    async fn actualizar_reporte(&self, id: i64, reporte: &Reporte) -> ApiResult<Reporte> {
        let path = format!("/reporte/{}", id);
        let mut payload = reporte_payload(reporte)?;
        payload.id = Some(id);
        let request = self.client.put(self.url(&path)).json(&payload);
        let backend: ReporteBackend = self.enviar(request, &path).await?;
        Ok(reporte_from_backend(backend)?)
    }

    async fn eliminar_reporte(&self, id: i64) -> ApiResult<()> {
        let path = format!("/reporte/{}", id);
        self.enviar_sin_cuerpo(self.client.delete(self.url(&path)), &path).await
    }
}
