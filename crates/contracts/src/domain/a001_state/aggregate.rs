use crate::domain::common::{default_active, RecordId};
use crate::shared::validation::{FieldErrors, FieldFormat, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/estados";
pub const PERMISSION_PREFIX: &str = "estados";

/// Estado (unidade federativa)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: RecordId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Sigla da UF, duas letras
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDto {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl StateDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("nome", "Nome", &self.name, ValidationRules::required().length(1, 100))
            .text("sigla", "Sigla", &self.code, ValidationRules::required().format(FieldFormat::StateCode))
            .finish()
    }
}
