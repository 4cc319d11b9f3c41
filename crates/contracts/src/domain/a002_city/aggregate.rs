use crate::domain::common::{default_active, RecordId};
use crate::shared::validation::{FieldErrors, FieldFormat, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/cidades";
pub const PERMISSION_PREFIX: &str = "cidades";

/// Cidade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: RecordId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "estado_id")]
    pub state_id: RecordId,
    /// Nome do estado, preenchido pelo backend para exibição
    #[serde(rename = "estado_nome", default)]
    pub state_name: Option<String>,
    #[serde(rename = "estado_sigla", default)]
    pub state_code: Option<String>,
    /// Código IBGE do município (7 dígitos)
    #[serde(rename = "codigo_ibge", default)]
    pub ibge_code: Option<String>,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityDto {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "estado_id")]
    pub state_id: Option<RecordId>,
    #[serde(rename = "codigo_ibge")]
    pub ibge_code: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl CityDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("nome", "Nome", &self.name, ValidationRules::required().length(1, 150))
            .check("estado_id", self.state_id.is_some(), "Estado é obrigatório")
            .text(
                "codigo_ibge",
                "Código IBGE",
                self.ibge_code.as_deref().unwrap_or_default(),
                ValidationRules::none().format(FieldFormat::Digits(7)),
            )
            .finish()
    }
}
