// ==========================================
// 适配层集成测试
// ==========================================
// 场景: 星期规范化、时间编解码、原因代码映射、后端报文 → 网格
// ==========================================

mod helpers;

use helpers::*;
use transmisiones_control::adapter::day_name::normalize_day_name;
use transmisiones_control::adapter::target_mapper::{
    motivo_efectivo, to_backend, to_frontend, TargetCode,
};
use transmisiones_control::adapter::time_codec::{hora_to_string, string_to_hora, HoraBackend};
use transmisiones_control::adapter::wire::{
    filial_from_backend, programa_from_backend, reportes_from_backend, FilialBackend,
    ProgramaBackend, ReporteBackend,
};
use transmisiones_control::domain::{DiaSemana, EstadoCelda};
use transmisiones_control::engine::{RangoFechas, StatusGridBuilder};

// ==========================================
// 测试 1: 重音/大小写变体规范化为同一标记
// ==========================================

#[test]
fn test_day_variants_normalize_to_same_token() {
    let variantes = [
        ("Miércoles", "MIERCOLES"),
        ("MIERCOLES", "MIERCOLES"),
        ("miercoles", "MIERCOLES"),
        ("MIÉRCOLES", "MIERCOLES"),
        (" sábado ", "SABADO"),
        ("Sabado", "SABADO"),
        ("lunes", "LUNES"),
        ("DOMINGO", "DOMINGO"),
    ];
    for (entrada, esperado) in variantes {
        assert_eq!(normalize_day_name(entrada), esperado, "entrada={}", entrada);
    }
    for dia in DiaSemana::TODOS {
        assert_eq!(normalize_day_name(dia.token()), dia.token());
    }
}

// ==========================================
// 测试 2: 时间编解码往返
// ==========================================

#[test]
fn test_time_roundtrip_over_all_minutes() {
    for hour in 0..24 {
        for minute in 0..60 {
            let hora = HoraBackend::new(hour, minute);
            let texto = hora_to_string(&hora);
            assert_eq!(string_to_hora(&texto), hora);
            assert_eq!(hora_to_string(&string_to_hora(&texto)), texto);
        }
    }
}

#[test]
fn test_malformed_time_defaults_to_midnight() {
    assert_eq!(string_to_hora("abc"), HoraBackend::new(0, 0));
    assert_eq!(string_to_hora(""), HoraBackend::new(0, 0));
}

// ==========================================
// 测试 3: 原因代码映射
// ==========================================

#[test]
fn test_target_roundtrip() {
    for code in TargetCode::TODOS {
        // UI 代码 → 后端 → UI 代码
        assert_eq!(to_frontend(&to_backend(code.abbr())), code.abbr());
        // 后端字符串 → UI → 后端
        assert_eq!(to_backend(&to_frontend(code.backend())), code.backend());
    }
    assert_eq!(to_backend("Otros"), "Otro");
    assert_eq!(to_frontend("Otro"), "Otros");
    assert_eq!(to_backend("Desconocido"), "Desconocido");
    assert_eq!(to_frontend("Desconocido"), "Desconocido");
}

#[test]
fn test_motivo_only_for_otros() {
    assert_eq!(
        motivo_efectivo(Some("Otro"), Some("Corte de luz")),
        Some("Corte de luz".to_string())
    );
    assert_eq!(motivo_efectivo(Some("P.Tec"), Some("Corte de luz")), None);
    assert_eq!(motivo_efectivo(None, Some("Corte de luz")), None);
}

// ==========================================
// 测试 4: 后端 JSON → 领域 → 网格
// ==========================================

#[test]
fn test_backend_payloads_to_grid() {
    let filiales: Vec<FilialBackend> = serde_json::from_str(
        r#"[{"id": 1, "nombre": "Central", "isActivo": true}]"#,
    )
    .unwrap();
    let programas: Vec<ProgramaBackend> = serde_json::from_str(
        r#"[
            {"id": 10, "nombre": "Noticiero", "isActivo": true,
             "diasSemana": ["Lunes", "Miércoles"],
             "horaInicio": {"hour": 8, "minute": 0, "second": 0, "nano": 0},
             "filialesIds": [1]},
            {"id": 11, "nombre": "Otra filial", "isActivo": true,
             "diasSemana": "LUNES", "horaInicio": "07:00", "filialesIds": [2]}
        ]"#,
    )
    .unwrap();
    let reportes: Vec<ReporteBackend> = serde_json::from_str(
        r#"[
            {"id_reporte": 1, "fecha": "2024-01-03", "estadoTransmision": "Tarde",
             "target": "Otro", "motivo": "Corte de luz", "filialId": 1, "programaId": 10,
             "hora": "08:00", "hora_tt": {"hour": 8, "minute": 40, "second": 0, "nano": 0}},
            {"id": 2, "fecha": "sin fecha", "estadoTransmision": "Si", "filialId": 1, "programaId": 10}
        ]"#,
    )
    .unwrap();

    let filial = filial_from_backend(filiales.into_iter().next().unwrap());
    let programas: Vec<_> = programas.into_iter().map(programa_from_backend).collect();
    let reportes = reportes_from_backend(reportes);
    assert_eq!(reportes.len(), 1);

    let rango = RangoFechas::new(fecha(2024, 1, 1), fecha(2024, 1, 7)).unwrap();
    let grid = StatusGridBuilder::build_grid(&filial, &programas, &reportes, &rango);
    assert_eq!(grid.len(), 7);

    let estados: Vec<EstadoCelda> = grid.iter().map(|c| c.estado).collect();
    assert_eq!(
        estados,
        vec![
            EstadoCelda::Pendiente,
            EstadoCelda::NoProgramado,
            EstadoCelda::Tarde,
            EstadoCelda::NoProgramado,
            EstadoCelda::NoProgramado,
            EstadoCelda::NoProgramado,
            EstadoCelda::NoProgramado,
        ]
    );
    assert_eq!(grid[2].target(), Some("Otros"));
    assert_eq!(grid[2].motivo(), Some("Corte de luz"));
    assert_eq!(grid[2].hora_real(), Some("08:40"));
}

// ==========================================
// 测试: 后端 LocalTime 带秒的字符串截为 HH:MM
// ==========================================

#[test]
fn test_programa_time_with_seconds_normalized() {
    let backend: ProgramaBackend = serde_json::from_str(
        r#"{"id": 10, "nombre": "Noticiero", "isActivo": true,
            "diasSemana": ["LUNES"], "horaInicio": "08:00:00", "filialesIds": [1]}"#,
    )
    .unwrap();
    let programa = programa_from_backend(backend);
    assert_eq!(programa.hora_inicio, "08:00");

    let reportes: Vec<ReporteBackend> = serde_json::from_str(
        r#"[{"id": 3, "fecha": "2024-01-01", "estadoTransmision": "Tarde", "target": "Tarde",
             "filialId": 1, "programaId": 10, "hora": "08:00:00", "hora_tt": "08:12:45"}]"#,
    )
    .unwrap();
    let reportes = reportes_from_backend(reportes);
    assert_eq!(reportes[0].resultado.hora_real(), Some("08:12"));
}
