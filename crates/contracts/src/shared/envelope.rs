//! Response envelope used by every backend endpoint.
//!
//! The backend wraps every answer as `{ sucesso, dados, mensagem, erros }`,
//! but the shapes are not uniform across endpoints:
//! - `mensagem` is usually a string, sometimes an object `{ mensagem, erros }`
//! - `erros` is a field map (string or list per field), a list, or a string
//!
//! All variants are folded into [`ApiFailure`] by [`ApiEnvelope::into_result`].

use super::validation::FieldErrors;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Message used when the backend reports a failure without any text
pub const DEFAULT_FAILURE_MESSAGE: &str = "Não foi possível concluir a operação.";

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub sucesso: bool,
    pub dados: Option<T>,
    pub mensagem: Option<MessageField>,
    pub erros: Option<ErrorsField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageField {
    Text(String),
    Detailed {
        mensagem: Option<String>,
        erros: Option<ErrorsField>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorsField {
    Fields(BTreeMap<String, FieldMessages>),
    List(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl FieldMessages {
    fn joined(&self) -> String {
        match self {
            FieldMessages::One(s) => s.clone(),
            FieldMessages::Many(list) => list.join(" "),
        }
    }
}

/// Normalized failure: one general message plus optional per-field messages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiFailure {
    pub message: String,
    pub field_errors: FieldErrors,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: FieldErrors::new(),
        }
    }
}

impl<T> ApiEnvelope<T> {
    /// Plain text message, whichever shape it came in
    pub fn message(&self) -> Option<String> {
        match &self.mensagem {
            Some(MessageField::Text(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(MessageField::Detailed {
                mensagem: Some(s), ..
            }) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// Collects the failure description out of every place the backend puts it
    pub fn failure(&self) -> ApiFailure {
        let mut field_errors = FieldErrors::new();
        let mut general: Vec<String> = Vec::new();

        let nested = match &self.mensagem {
            Some(MessageField::Detailed { erros, .. }) => erros.as_ref(),
            _ => None,
        };

        for errors in [self.erros.as_ref(), nested].into_iter().flatten() {
            match errors {
                ErrorsField::Fields(map) => {
                    for (field, messages) in map {
                        field_errors.insert(field.clone(), messages.joined());
                    }
                }
                ErrorsField::List(list) => general.extend(list.iter().cloned()),
                ErrorsField::Text(text) => general.push(text.clone()),
            }
        }

        let message = self
            .message()
            .or_else(|| (!general.is_empty()).then(|| general.join(" ")))
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());

        ApiFailure {
            message,
            field_errors,
        }
    }

    /// `Ok(dados)` when `sucesso` is true, otherwise the normalized failure
    pub fn into_result(self) -> Result<Option<T>, ApiFailure> {
        if self.sucesso {
            Ok(self.dados)
        } else {
            Err(self.failure())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(value: Value) -> ApiEnvelope<Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_success_returns_dados() {
        let env = parse(json!({"sucesso": true, "dados": {"id": 1}}));
        assert_eq!(env.into_result().unwrap(), Some(json!({"id": 1})));
    }

    #[test]
    fn test_field_errors_map() {
        let env = parse(json!({"sucesso": false, "erros": {"nome": "obrigatório"}}));
        let failure = env.into_result().unwrap_err();
        assert_eq!(failure.field_errors.get("nome").map(String::as_str), Some("obrigatório"));
        assert_eq!(failure.message, DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_message_object_with_nested_errors() {
        let env = parse(json!({
            "sucesso": false,
            "mensagem": {"mensagem": "Dados inválidos", "erros": {"sigla": ["tamanho", "formato"]}}
        }));
        let failure = env.failure();
        assert_eq!(failure.message, "Dados inválidos");
        assert_eq!(failure.field_errors["sigla"], "tamanho formato");
    }

    #[test]
    fn test_error_list_becomes_general_message() {
        let env = parse(json!({"sucesso": false, "erros": ["a", "b"]}));
        assert_eq!(env.failure().message, "a b");
    }

    #[test]
    fn test_missing_sucesso_is_failure() {
        let env = parse(json!({"mensagem": "Sem permissão"}));
        let failure = env.into_result().unwrap_err();
        assert_eq!(failure.message, "Sem permissão");
    }
}
