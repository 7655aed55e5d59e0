// ==========================================
// 传输监控系统 - 节目领域模型
// ==========================================
// 红线: 星期集合为空的节目在任何日期都不播出
// ==========================================

use crate::domain::types::DiaSemana;
use serde::{Deserialize, Serialize};

// ==========================================
// Programa - 节目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Programa {
    pub id: i64,
    pub nombre: String,
    pub is_activo: bool,

    /// 计划开播时间 "HH:MM"
    pub hora_inicio: String,

    /// 播出星期（已做重音规范化；无法识别的值原样保留，永不匹配）
    pub dias_semana: Vec<String>,

    /// 关联分台（一个节目可被多个分台共享）
    #[serde(default)]
    pub filiales_ids: Vec<i64>,
}

impl Programa {
    pub fn new(id: i64, nombre: impl Into<String>, hora_inicio: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            is_activo: true,
            hora_inicio: hora_inicio.into(),
            dias_semana: Vec::new(),
            filiales_ids: Vec::new(),
        }
    }

    pub fn con_dias(mut self, dias: &[DiaSemana]) -> Self {
        self.dias_semana = dias.iter().map(|d| d.token().to_string()).collect();
        self
    }

    pub fn con_filiales(mut self, filiales: &[i64]) -> Self {
        self.filiales_ids = filiales.to_vec();
        self
    }
}

/// 新建/编辑节目的输入
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramaInput {
    pub nombre: String,
    #[serde(default = "default_true")]
    pub is_activo: bool,
    #[serde(default)]
    pub dias_semana: Vec<String>,
    #[serde(default)]
    pub hora_inicio: Option<String>,
    /// 更新时为空表示保留原有关联；清空关联用 asignar_filiales(id, &[])
    #[serde(default)]
    pub filiales_ids: Vec<i64>,
}

fn default_true() -> bool {
    true
}
