use crate::domain::common::{default_active, RecordId};
use crate::shared::validation::{FieldErrors, FieldFormat, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/plano-contas";
pub const PERMISSION_PREFIX: &str = "plano_contas";

/// Natureza da conta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Receita,
    Despesa,
}

impl AccountKind {
    pub const ALL: [AccountKind; 2] = [AccountKind::Receita, AccountKind::Despesa];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Receita => "receita",
            AccountKind::Despesa => "despesa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Receita => "Receita",
            AccountKind::Despesa => "Despesa",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == code.trim())
    }
}

/// Conta do plano de contas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: RecordId,
    /// Código hierárquico, ex.: `1.01.003`
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: AccountKind,
    #[serde(rename = "conta_pai_id", default)]
    pub parent_id: Option<RecordId>,
    #[serde(rename = "conta_pai_nome", default)]
    pub parent_name: Option<String>,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountDto {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: Option<AccountKind>,
    #[serde(rename = "conta_pai_id")]
    pub parent_id: Option<RecordId>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl AccountDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("codigo", "Código", &self.code, ValidationRules::required().format(FieldFormat::AccountCode))
            .text("nome", "Nome", &self.name, ValidationRules::required().length(1, 150))
            .check("tipo", self.kind.is_some(), "Tipo é obrigatório")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_format() {
        let account: Account = serde_json::from_str(
            r#"{"id": 3, "codigo": "3.01", "nome": "Vendas", "tipo": "receita", "conta_pai_id": 1}"#,
        )
        .unwrap();
        assert_eq!(account.kind, AccountKind::Receita);
        assert_eq!(account.parent_id, Some(RecordId(1)));
        assert_eq!(AccountKind::from_code("despesa"), Some(AccountKind::Despesa));
        assert_eq!(AccountKind::from_code("outro"), None);
    }

    #[test]
    fn test_code_and_kind_required() {
        let dto = AccountDto {
            code: "3..1".into(),
            name: "Vendas".into(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains_key("codigo"));
        assert!(errors.contains_key("tipo"));
    }
}
