use crate::domain::common::RecordId;
use crate::shared::validation::{FieldErrors, FieldFormat, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/vendas";
pub const PERMISSION_PREFIX: &str = "vendas";

/// Situação da venda, independente de qualquer flag `ativo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Aberta,
    Faturada,
    Cancelada,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [SaleStatus::Aberta, SaleStatus::Faturada, SaleStatus::Cancelada];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Aberta => "aberta",
            SaleStatus::Faturada => "faturada",
            SaleStatus::Cancelada => "cancelada",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Aberta => "Aberta",
            SaleStatus::Faturada => "Faturada",
            SaleStatus::Cancelada => "Cancelada",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == code.trim())
    }
}

/// Venda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: RecordId,
    #[serde(rename = "numero", default)]
    pub number: Option<String>,
    #[serde(rename = "cliente")]
    pub customer: String,
    /// `YYYY-MM-DD`
    #[serde(rename = "data_venda")]
    pub sale_date: String,
    #[serde(rename = "valor_total", default)]
    pub total: f64,
    /// Kept as text so an unknown situation from the backend does not break the list
    #[serde(rename = "situacao")]
    pub status: String,
    #[serde(rename = "forma_pagamento_id", default)]
    pub payment_method_id: Option<RecordId>,
    #[serde(rename = "forma_pagamento_nome", default)]
    pub payment_method_name: Option<String>,
    #[serde(rename = "observacao", default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
}

impl Sale {
    pub fn status(&self) -> Option<SaleStatus> {
        SaleStatus::from_code(&self.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleDto {
    #[serde(rename = "cliente")]
    pub customer: String,
    #[serde(rename = "data_venda")]
    pub sale_date: String,
    #[serde(rename = "valor_total")]
    pub total: Option<f64>,
    #[serde(rename = "situacao")]
    pub status: Option<SaleStatus>,
    #[serde(rename = "forma_pagamento_id")]
    pub payment_method_id: Option<RecordId>,
    #[serde(rename = "observacao")]
    pub notes: Option<String>,
}

impl SaleDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("cliente", "Cliente", &self.customer, ValidationRules::required().length(1, 150))
            .text("data_venda", "Data da venda", &self.sale_date, ValidationRules::required().format(FieldFormat::IsoDate))
            .number("valor_total", "Valor total", self.total, ValidationRules::required().at_least(0.0))
            .check("situacao", self.status.is_some(), "Situação é obrigatória")
            .text(
                "observacao",
                "Observação",
                self.notes.as_deref().unwrap_or_default(),
                ValidationRules::none().length(0, 500),
            )
            .finish()
    }
}
