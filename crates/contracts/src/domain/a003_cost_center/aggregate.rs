use crate::domain::common::{default_active, RecordId};
use crate::shared::validation::{FieldErrors, FieldFormat, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/centros-custo";
pub const PERMISSION_PREFIX: &str = "centros_custo";

pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Centro de custo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCenter {
    pub id: RecordId,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    /// Cor de identificação em relatórios, `#RRGGBB`
    #[serde(rename = "cor", default)]
    pub color: Option<String>,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostCenterDto {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cor")]
    pub color: String,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl CostCenterDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("codigo", "Código", &self.code, ValidationRules::required().length(1, 20))
            .text("nome", "Nome", &self.name, ValidationRules::required().length(1, 100))
            .text("cor", "Cor", &self.color, ValidationRules::required().format(FieldFormat::HexColor))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_format() {
        let dto = CostCenterDto {
            code: "ADM".into(),
            name: "Administrativo".into(),
            color: "blue".into(),
            active: true,
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors["cor"], "Cor deve estar no formato #RRGGBB");
    }
}
