// ==========================================
// 传输监控系统 - 状态样式表
// ==========================================
// 职责: 每个格子状态唯一对应一组 颜色 / 图标 / 文案键
// 红线: 展示层只查表，不各自硬编码颜色
// ==========================================

use crate::domain::types::EstadoCelda;
use crate::i18n;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstiloEstado {
    pub estado: EstadoCelda,
    /// 背景色 class
    pub color: &'static str,
    pub icono: Option<&'static str>,
    /// i18n 键
    pub clave: &'static str,
}

impl EstiloEstado {
    /// 当前语言下的文案
    pub fn etiqueta(&self) -> String {
        i18n::t(self.clave)
    }
}

const ESTILOS: [EstiloEstado; 5] = [
    EstiloEstado {
        estado: EstadoCelda::Si,
        color: "bg-emerald-500",
        icono: Some("✓"),
        clave: "estado.si",
    },
    EstiloEstado {
        estado: EstadoCelda::No,
        color: "bg-red-500",
        icono: Some("✕"),
        clave: "estado.no",
    },
    EstiloEstado {
        estado: EstadoCelda::Tarde,
        color: "bg-amber-500",
        icono: None,
        clave: "estado.tarde",
    },
    EstiloEstado {
        estado: EstadoCelda::Pendiente,
        color: "bg-gray-200",
        icono: Some("⏱"),
        clave: "estado.pendiente",
    },
    EstiloEstado {
        estado: EstadoCelda::NoProgramado,
        color: "bg-gray-50",
        icono: None,
        clave: "estado.no_programado",
    },
];

pub struct StatusStyle;

impl StatusStyle {
    pub fn de(estado: EstadoCelda) -> &'static EstiloEstado {
        match estado {
            EstadoCelda::Si => &ESTILOS[0],
            EstadoCelda::No => &ESTILOS[1],
            EstadoCelda::Tarde => &ESTILOS[2],
            EstadoCelda::Pendiente => &ESTILOS[3],
            EstadoCelda::NoProgramado => &ESTILOS[4],
        }
    }

    /// 图例（只含已排期的四种状态，顺序: 已播、未播、迟播、待填）
    pub fn leyenda() -> &'static [EstiloEstado] {
        &ESTILOS[..4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_state_maps_to_its_own_entry() {
        for estado in [
            EstadoCelda::NoProgramado,
            EstadoCelda::Pendiente,
            EstadoCelda::Si,
            EstadoCelda::No,
            EstadoCelda::Tarde,
        ] {
            assert_eq!(StatusStyle::de(estado).estado, estado);
        }
    }

    #[test]
    fn test_colors_and_icons() {
        assert_eq!(StatusStyle::de(EstadoCelda::Si).color, "bg-emerald-500");
        assert_eq!(StatusStyle::de(EstadoCelda::No).icono, Some("✕"));
        assert_eq!(StatusStyle::de(EstadoCelda::Tarde).icono, None);
        assert_eq!(StatusStyle::de(EstadoCelda::Pendiente).icono, Some("⏱"));
        assert!(StatusStyle::leyenda()
            .iter()
            .all(|e| e.estado != EstadoCelda::NoProgramado));
    }
}
