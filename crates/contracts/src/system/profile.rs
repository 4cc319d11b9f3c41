use crate::shared::validation::{FieldErrors, FieldFormat, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

pub const PROFILE_PATH: &str = "/usuarios/perfil";
pub const PROFILE_PASSWORD_PATH: &str = "/usuarios/perfil/senha";

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Profile of the logged-in user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
}

impl UpdateProfileDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("nome", "Nome", &self.name, ValidationRules::required().length(1, 120))
            .text("email", "E-mail", &self.email, ValidationRules::required().format(FieldFormat::Email))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub senha_atual: String,
    pub nova_senha: String,
    pub confirmacao: String,
}

impl ChangePasswordDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("senha_atual", "Senha atual", &self.senha_atual, ValidationRules::required())
            .text(
                "nova_senha",
                "Nova senha",
                &self.nova_senha,
                ValidationRules::required().length(MIN_PASSWORD_LENGTH, 128),
            )
            .check(
                "confirmacao",
                self.confirmacao == self.nova_senha,
                "A confirmação não confere com a nova senha",
            )
            .finish()
    }
}
