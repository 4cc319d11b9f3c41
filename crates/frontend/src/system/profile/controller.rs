//! Loads and saves the profile of the logged-in user

use crate::shared::api::{call, get_data, ApiError, CrudError, Method, SharedClient};
use crate::shared::crud::form_state::FormErrors;
use contracts::system::profile::{
    ChangePasswordDto, UpdateProfileDto, UserProfile, PROFILE_PASSWORD_PATH, PROFILE_PATH,
};

/// Editable copy of the profile, one string per input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub nome: String,
    pub email: String,
    pub telefone: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            nome: profile.name.clone(),
            email: profile.email.clone(),
            telefone: profile.phone.clone().unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> UpdateProfileDto {
        let telefone = self.telefone.trim();
        UpdateProfileDto {
            name: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!telefone.is_empty()).then(|| telefone.to_string()),
        }
    }
}

/// What a failed save shows: banner text plus per-field messages
pub fn form_errors(err: &CrudError) -> FormErrors {
    FormErrors {
        general: Some(err.user_message()),
        fields: err.field_errors().cloned().unwrap_or_default(),
    }
}

#[derive(Clone)]
pub struct ProfileController {
    client: SharedClient,
}

impl ProfileController {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> Result<UserProfile, CrudError> {
        get_data(self.client.as_ref(), PROFILE_PATH).await
    }

    pub async fn save(&self, form: &ProfileForm) -> Result<(), CrudError> {
        let dto = form.to_dto();
        dto.validate().map_err(CrudError::Validation)?;
        let body = serde_json::to_value(&dto).map_err(|e| ApiError::Decode(e.to_string()))?;
        call(self.client.as_ref(), Method::Put, PROFILE_PATH, Some(body)).await?;
        log::info!("Profile saved");
        Ok(())
    }

    pub async fn change_password(&self, dto: &ChangePasswordDto) -> Result<(), CrudError> {
        dto.validate().map_err(CrudError::Validation)?;
        let body = serde_json::to_value(dto).map_err(|e| ApiError::Decode(e.to_string()))?;
        call(self.client.as_ref(), Method::Put, PROFILE_PASSWORD_PATH, Some(body)).await?;
        log::info!("Password changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockApiClient;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn setup() -> (Rc<MockApiClient>, ProfileController) {
        let mock = Rc::new(MockApiClient::new());
        let controller = ProfileController::new(mock.clone());
        (mock, controller)
    }

    fn form() -> ProfileForm {
        ProfileForm {
            nome: " Ana Souza ".into(),
            email: "ana@empresa.com.br".into(),
            telefone: "".into(),
        }
    }

    #[test]
    fn test_load_reads_profile() {
        let (mock, controller) = setup();
        mock.reply(json!({
            "sucesso": true,
            "dados": {"id": 3, "login": "ana", "nome": "Ana", "email": "ana@empresa.com.br", "telefone": "71 9999-0000"}
        }));

        let profile = block_on(controller.load()).unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(ProfileForm::from_profile(&profile).telefone, "71 9999-0000");
        assert_eq!(mock.last_call().unwrap().path, PROFILE_PATH);
    }

    #[test]
    fn test_save_puts_trimmed_dto() {
        let (mock, controller) = setup();
        mock.reply(json!({"sucesso": true, "dados": null}));

        block_on(controller.save(&form())).unwrap();
        let call = mock.last_call().unwrap();
        assert_eq!(call.method, Method::Put);
        assert_eq!(call.path, PROFILE_PATH);
        assert_eq!(
            call.body.unwrap(),
            json!({"nome": "Ana Souza", "email": "ana@empresa.com.br", "telefone": null})
        );
    }

    #[test]
    fn test_invalid_email_is_not_sent() {
        let (mock, controller) = setup();
        let mut bad = form();
        bad.email = "ana".into();

        let err = block_on(controller.save(&bad)).unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("email"));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_wrong_current_password_is_reported() {
        let (mock, controller) = setup();
        mock.reply(json!({"sucesso": false, "mensagem": "Senha atual incorreta"}));
        let dto = ChangePasswordDto {
            senha_atual: "errada".into(),
            nova_senha: "segredo123".into(),
            confirmacao: "segredo123".into(),
        };

        let err = block_on(controller.change_password(&dto)).unwrap_err();
        let errors = form_errors(&err);
        assert_eq!(errors.general.as_deref(), Some("Senha atual incorreta"));
        assert!(errors.fields.is_empty());
        assert_eq!(mock.last_call().unwrap().path, PROFILE_PASSWORD_PATH);
    }

    #[test]
    fn test_mismatched_confirmation_stays_local() {
        let (mock, controller) = setup();
        let dto = ChangePasswordDto {
            senha_atual: "antiga".into(),
            nova_senha: "segredo123".into(),
            confirmacao: "outra".into(),
        };

        let err = block_on(controller.change_password(&dto)).unwrap_err();
        assert!(form_errors(&err).fields.contains_key("confirmacao"));
        assert_eq!(mock.call_count(), 0);
    }
}
