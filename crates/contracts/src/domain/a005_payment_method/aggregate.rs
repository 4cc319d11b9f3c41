use crate::domain::common::{default_active, RecordId};
use crate::shared::validation::{FieldErrors, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/formas-pagamento";
pub const PERMISSION_PREFIX: &str = "formas_pagamento";

/// Forma de pagamento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: RecordId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Taxa cobrada pela operadora, em %
    #[serde(rename = "taxa_percentual", default)]
    pub fee_percent: f64,
    /// Prazo de recebimento em dias
    #[serde(rename = "prazo_dias", default)]
    pub term_days: i64,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodDto {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "taxa_percentual")]
    pub fee_percent: Option<f64>,
    #[serde(rename = "prazo_dias")]
    pub term_days: Option<i64>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl PaymentMethodDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("nome", "Nome", &self.name, ValidationRules::required().length(1, 100))
            .number(
                "taxa_percentual",
                "Taxa (%)",
                self.fee_percent,
                ValidationRules::none().range(0.0, 100.0),
            )
            .number(
                "prazo_dias",
                "Prazo (dias)",
                self.term_days.map(|d| d as f64),
                ValidationRules::none().integer().range(0.0, 365.0),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_range() {
        let dto = PaymentMethodDto {
            name: "Cartão de crédito".into(),
            fee_percent: Some(120.0),
            term_days: Some(30),
            active: true,
        };
        assert!(dto.validate().unwrap_err().contains_key("taxa_percentual"));
    }

    #[test]
    fn test_term_range() {
        let dto = PaymentMethodDto {
            name: "Boleto".into(),
            fee_percent: None,
            term_days: Some(400),
            active: true,
        };
        assert!(dto.validate().unwrap_err().contains_key("prazo_dias"));
    }
}
