use crate::domain::common::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ENDPOINT: &str = "/auditoria";
pub const PERMISSION_PREFIX: &str = "auditoria";

/// Registro do log de auditoria. Somente leitura.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: RecordId,
    #[serde(rename = "usuario", default)]
    pub user: String,
    /// criar / editar / excluir / login ...
    #[serde(rename = "acao", default)]
    pub action: String,
    #[serde(rename = "tabela", default)]
    pub table: String,
    /// Id do registro afetado; o backend envia número ou texto
    #[serde(rename = "registro_id", default)]
    pub record_ref: Option<Value>,
    #[serde(rename = "data_hora", default)]
    pub occurred_at: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(rename = "detalhes", default)]
    pub details: Option<Value>,
}

impl AuditEntry {
    pub fn record_ref_display(&self) -> String {
        match &self.record_ref {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ref_accepts_number_or_text() {
        let numeric: AuditEntry =
            serde_json::from_str(r#"{"id": 1, "usuario": "ana", "acao": "editar", "registro_id": 15}"#).unwrap();
        assert_eq!(numeric.record_ref_display(), "15");

        let text: AuditEntry = serde_json::from_str(r#"{"id": 2, "registro_id": "ABC"}"#).unwrap();
        assert_eq!(text.record_ref_display(), "ABC");

        let missing: AuditEntry = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(missing.record_ref_display(), "");
    }
}
