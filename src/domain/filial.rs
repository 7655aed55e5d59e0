// ==========================================
// 传输监控系统 - 分台领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Filial - 分台
// ==========================================
// 读多写少：后台表单增删改，其余场景只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filial {
    pub id: i64,
    pub nombre: String,
    pub is_activo: bool,

    /// 分台侧记录的节目关联（节目侧 filiales_ids 为空时才使用）
    #[serde(default)]
    pub programa_ids: Vec<i64>,
}

impl Filial {
    pub fn new(id: i64, nombre: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            is_activo: true,
            programa_ids: Vec::new(),
        }
    }
}

/// 新建/编辑分台的输入（id 由后端生成）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilialInput {
    pub nombre: String,
    #[serde(default = "default_true")]
    pub is_activo: bool,
}

fn default_true() -> bool {
    true
}
