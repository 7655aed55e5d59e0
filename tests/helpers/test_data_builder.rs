// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use transmisiones_control::domain::{DiaSemana, Filial, Programa, Reporte, ResultadoTransmision};

pub fn fecha(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn instante(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn filial(id: i64, nombre: &str) -> Filial {
    Filial::new(id, nombre)
}

// ==========================================
// Programa 构建器
// ==========================================

pub struct ProgramaBuilder {
    programa: Programa,
}

impl ProgramaBuilder {
    pub fn new(id: i64, nombre: &str) -> Self {
        Self {
            programa: Programa::new(id, nombre, "08:00"),
        }
    }

    pub fn hora(mut self, hora: &str) -> Self {
        self.programa.hora_inicio = hora.to_string();
        self
    }

    pub fn dias(mut self, dias: &[DiaSemana]) -> Self {
        self.programa = self.programa.con_dias(dias);
        self
    }

    /// 原样写入星期字符串（测试重音/大小写/未知值）
    pub fn dias_texto(mut self, dias: &[&str]) -> Self {
        self.programa.dias_semana = dias.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn filiales(mut self, filiales: &[i64]) -> Self {
        self.programa = self.programa.con_filiales(filiales);
        self
    }

    pub fn inactivo(mut self) -> Self {
        self.programa.is_activo = false;
        self
    }

    pub fn build(self) -> Programa {
        self.programa
    }
}

// ==========================================
// Reporte 构建器
// ==========================================

pub struct ReporteBuilder {
    reporte: Reporte,
}

impl ReporteBuilder {
    pub fn new(filial_id: i64, programa_id: i64, fecha: NaiveDate) -> Self {
        Self {
            reporte: Reporte::new(filial_id, programa_id, fecha, ResultadoTransmision::Pendiente),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.reporte.id = Some(id);
        self
    }

    pub fn actualizado(mut self, at: DateTime<Utc>) -> Self {
        self.reporte.updated_at = Some(at);
        self
    }

    pub fn si(mut self, hora: &str) -> Self {
        self.reporte.resultado = ResultadoTransmision::Si {
            hora_real: Some(hora.to_string()),
        };
        self
    }

    pub fn no(mut self, target: &str, motivo: Option<&str>) -> Self {
        self.reporte.resultado = ResultadoTransmision::No {
            target: Some(target.to_string()),
            motivo: motivo.map(str::to_string),
        };
        self
    }

    pub fn tarde(mut self, programada: &str, real: &str, target: &str, motivo: Option<&str>) -> Self {
        self.reporte.resultado = ResultadoTransmision::Tarde {
            hora_programada: Some(programada.to_string()),
            hora_real: Some(real.to_string()),
            target: Some(target.to_string()),
            motivo: motivo.map(str::to_string),
        };
        self
    }

    pub fn build(self) -> Reporte {
        self.reporte
    }
}
