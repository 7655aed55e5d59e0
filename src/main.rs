// ==========================================
// 传输监控系统 - 命令行入口
// ==========================================
// 用法:
//   transmisiones-control <filial_id> [YYYY-MM-DD] [config.json]
//
// 拉取分台在该日期所在周的状态网格，以 CSV 输出到 stdout
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use transmisiones_control::adapter::date_format::parse_fecha;
use transmisiones_control::api::{grid_to_csv, ControlApi, HttpGateway};
use transmisiones_control::engine::{RangoFechas, StatusStyle, SummaryBuilder};
use transmisiones_control::{i18n, logging, AppConfig, APP_NAME, VERSION};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let filial_id: i64 = match args.next() {
        Some(id) => id
            .trim()
            .parse()
            .with_context(|| format!("filial_id 无效: {}", id))?,
        None => bail!("用法: transmisiones-control <filial_id> [YYYY-MM-DD] [config.json]"),
    };
    let fecha = match args.next().filter(|s| !s.trim().is_empty()) {
        Some(texto) => parse_fecha(&texto)?,
        None => Local::now().date_naive(),
    };
    let config_path = args.next().map(PathBuf::from);

    let config = AppConfig::load(config_path.as_deref())?;
    i18n::set_locale(&config.locale);

    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!(api_url = %config.api_url, timeout_secs = config.timeout_secs, "后端配置");

    let gateway = HttpGateway::from_config(&config)?;
    let api = ControlApi::new(Arc::new(gateway));

    let rango = RangoFechas::semana_de(fecha);
    let grid = api.cargar_grid(filial_id, rango).await?;
    if grid.programas.is_empty() {
        tracing::warn!(
            "{}",
            i18n::t_with_args("grid.sin_programas", &[("filial", grid.filial.nombre.as_str())])
        );
    }

    print!("{}", grid_to_csv(&grid.celdas, &grid.programas)?);

    // 图例与汇总写到 stderr，便于 stdout 直接重定向为 CSV 文件
    let resumen = SummaryBuilder::resumen(filial_id, &grid.celdas, &rango);
    for estilo in StatusStyle::leyenda() {
        eprintln!(
            "{} {}: {}",
            estilo.icono.unwrap_or("·"),
            estilo.etiqueta(),
            resumen.conteo.cantidad(estilo.estado)
        );
    }
    let celdas = grid.celdas.len().to_string();
    tracing::info!("{}", i18n::t_with_args("grid.cargado", &[("celdas", celdas.as_str())]));

    Ok(())
}
