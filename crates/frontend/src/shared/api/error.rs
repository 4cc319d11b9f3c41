use contracts::shared::{ApiFailure, FieldErrors};
use thiserror::Error;

/// Transport level failure, before any envelope could be read
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Falha de comunicação com o servidor: {0}")]
    Network(String),
    #[error("Sessão expirada. Faça login novamente.")]
    Unauthorized,
    #[error("O servidor respondeu com HTTP {status}")]
    Status { status: u16 },
    #[error("Resposta inesperada do servidor: {0}")]
    Decode(String),
}

/// Every failure a page can surface to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CrudError {
    #[error("Você não tem permissão para {0}.")]
    PermissionDenied(&'static str),
    #[error("Verifique os campos destacados.")]
    Validation(FieldErrors),
    #[error("{message}")]
    Server {
        message: String,
        field_errors: FieldErrors,
    },
    #[error("Registro não encontrado.")]
    NotFound,
    #[error(transparent)]
    Transport(#[from] ApiError),
}

impl CrudError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CrudError::Validation(errors) => Some(errors),
            CrudError::Server { field_errors, .. } if !field_errors.is_empty() => {
                Some(field_errors)
            }
            _ => None,
        }
    }

    /// Message for the general error area of a form or a notice
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<ApiFailure> for CrudError {
    fn from(failure: ApiFailure) -> Self {
        CrudError::Server {
            message: failure.message,
            field_errors: failure.field_errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_displayed_verbatim() {
        let err: CrudError = ApiFailure::new("Sigla já cadastrada").into();
        assert_eq!(err.user_message(), "Sigla já cadastrada");
        assert_eq!(err.field_errors(), None);
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err = CrudError::from(ApiError::Status { status: 500 });
        assert_eq!(err.user_message(), "O servidor respondeu com HTTP 500");
    }

    #[test]
    fn test_validation_exposes_field_errors() {
        let mut fields = FieldErrors::new();
        fields.insert("nome".into(), "Nome é obrigatório".into());
        let err = CrudError::Validation(fields.clone());
        assert_eq!(err.field_errors(), Some(&fields));
    }
}
