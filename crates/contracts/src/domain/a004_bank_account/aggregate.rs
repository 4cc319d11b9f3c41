use crate::domain::common::{default_active, RecordId};
use crate::shared::validation::{FieldErrors, FieldFormat, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/contas-bancarias";
pub const PERMISSION_PREFIX: &str = "contas_bancarias";

/// Conta bancária
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: RecordId,
    #[serde(rename = "banco")]
    pub bank: String,
    #[serde(rename = "agencia")]
    pub branch: String,
    #[serde(rename = "conta")]
    pub account: String,
    #[serde(rename = "saldo_inicial", default)]
    pub opening_balance: f64,
    #[serde(rename = "saldo_atual", default)]
    pub current_balance: Option<f64>,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountDto {
    #[serde(rename = "banco")]
    pub bank: String,
    #[serde(rename = "agencia")]
    pub branch: String,
    #[serde(rename = "conta")]
    pub account: String,
    #[serde(rename = "saldo_inicial")]
    pub opening_balance: Option<f64>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl BankAccountDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("banco", "Banco", &self.bank, ValidationRules::required().length(1, 100))
            .text("agencia", "Agência", &self.branch, ValidationRules::required().format(FieldFormat::BankBranch))
            .text("conta", "Conta", &self.account, ValidationRules::required().length(1, 20))
            .number("saldo_inicial", "Saldo inicial", self.opening_balance, ValidationRules::none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let errors = BankAccountDto::default().validate().unwrap_err();
        assert!(errors.contains_key("banco"));
        assert!(errors.contains_key("agencia"));
        assert!(errors.contains_key("conta"));
        assert!(!errors.contains_key("saldo_inicial"));
    }

    #[test]
    fn test_negative_opening_balance_is_allowed() {
        let dto = BankAccountDto {
            bank: "Banco do Brasil".into(),
            branch: "1234-5".into(),
            account: "98765-0".into(),
            opening_balance: Some(-150.0),
            active: true,
        };
        assert!(dto.validate().is_ok());
    }
}
