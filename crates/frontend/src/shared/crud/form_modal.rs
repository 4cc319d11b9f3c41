//! Create / edit modal of an entity page

use super::entity::CrudEntity;
use super::form_fields::FormFields;
use super::form_state::{FormErrors, ModalState};
use crate::shared::api::{call, get_data, ApiError, CrudError, Method, SharedClient};
use contracts::domain::common::RecordId;
use contracts::system::permissions::PermissionSet;
use serde_json::Value;
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub method: Method,
    pub path: String,
    pub body: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// A submit was already in flight
    Ignored,
}

pub struct EntityFormModal<E: CrudEntity> {
    client: SharedClient,
    _entity: PhantomData<E>,
}

impl<E: CrudEntity> Clone for EntityFormModal<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: CrudEntity> EntityFormModal<E> {
    pub fn new(client: SharedClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    pub fn initial_state() -> ModalState {
        ModalState::closed(E::default_form())
    }

    pub fn open_create(&self, perms: &PermissionSet, modal: &mut ModalState) -> Result<(), CrudError> {
        if !perms.create || E::READ_ONLY {
            return Err(CrudError::PermissionDenied("criar registros"));
        }
        *modal = ModalState::closed(E::default_form());
        modal.open = true;
        Ok(())
    }

    /// `GET /{entity}/{id}` turned into form values
    pub async fn fetch_for_edit(&self, perms: &PermissionSet, id: RecordId) -> Result<FormFields, CrudError> {
        if !perms.edit || E::READ_ONLY {
            return Err(CrudError::PermissionDenied("editar registros"));
        }
        let record: E::Record = get_data(self.client.as_ref(), &E::item_path(id)).await?;
        Ok(E::to_form(&record))
    }

    pub fn apply_edit(&self, modal: &mut ModalState, id: RecordId, fields: FormFields) {
        *modal = ModalState::closed(fields);
        modal.form.editing_id = Some(id);
        modal.open = true;
    }

    /// On failure the modal is left as it was (closed)
    pub async fn open_edit(
        &self,
        perms: &PermissionSet,
        modal: &mut ModalState,
        id: RecordId,
    ) -> Result<(), CrudError> {
        let fields = self.fetch_for_edit(perms, id).await?;
        self.apply_edit(modal, id, fields);
        Ok(())
    }

    /// Validate locally and build the request. `Ok(None)` while a submit is
    /// already in flight; validation failures are recorded on the modal.
    pub fn prepare_submit(&self, modal: &mut ModalState) -> Result<Option<SubmitRequest>, CrudError> {
        if modal.saving {
            log::warn!("{}: submit ignored, one already in flight", E::KEY);
            return Ok(None);
        }
        if E::READ_ONLY {
            return Err(CrudError::PermissionDenied("alterar registros"));
        }

        let payload = match E::to_payload(&modal.form.fields) {
            Ok(payload) => payload,
            Err(fields) => {
                let err = CrudError::Validation(fields.clone());
                modal.errors = FormErrors {
                    general: Some(err.user_message()),
                    fields,
                };
                return Err(err);
            }
        };
        let body = serde_json::to_value(&payload).map_err(|e| ApiError::Decode(e.to_string()))?;

        let (method, path) = match modal.form.editing_id {
            Some(id) => (Method::Put, E::item_path(id)),
            None => (Method::Post, E::ENDPOINT.to_string()),
        };
        modal.errors = FormErrors::default();
        modal.saving = true;
        Ok(Some(SubmitRequest { method, path, body }))
    }

    pub async fn send(&self, request: &SubmitRequest) -> Result<(), CrudError> {
        call(
            self.client.as_ref(),
            request.method,
            &request.path,
            Some(request.body.clone()),
        )
        .await
        .map(|_| ())
    }

    /// Success closes the modal; failure keeps it open with the errors shown
    pub fn finish_submit(&self, modal: &mut ModalState, result: Result<(), CrudError>) -> Result<(), CrudError> {
        modal.saving = false;
        match result {
            Ok(()) => {
                self.close(modal);
                Ok(())
            }
            Err(err) => {
                log::warn!("{}: save failed: {}", E::KEY, err);
                modal.errors = FormErrors {
                    general: Some(err.user_message()),
                    fields: err.field_errors().cloned().unwrap_or_default(),
                };
                Err(err)
            }
        }
    }

    pub async fn submit(&self, modal: &mut ModalState) -> Result<SubmitOutcome, CrudError> {
        let request = match self.prepare_submit(modal)? {
            Some(request) => request,
            None => return Ok(SubmitOutcome::Ignored),
        };
        let result = self.send(&request).await;
        self.finish_submit(modal, result)?;
        Ok(SubmitOutcome::Saved)
    }

    pub fn close(&self, modal: &mut ModalState) {
        *modal = ModalState::closed(E::default_form());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_state::StateEntity;
    use crate::shared::api::mock::MockApiClient;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn setup() -> (Rc<MockApiClient>, EntityFormModal<StateEntity>, ModalState) {
        let mock = Rc::new(MockApiClient::new());
        let modal = EntityFormModal::<StateEntity>::new(mock.clone());
        (mock, modal, EntityFormModal::<StateEntity>::initial_state())
    }

    #[test]
    fn test_open_create_starts_blank() {
        let (_mock, ctl, mut modal) = setup();
        modal.form.editing_id = Some(RecordId(3));
        ctl.open_create(&PermissionSet::all(), &mut modal).unwrap();
        assert!(modal.open);
        assert_eq!(modal.form.editing_id, None);
        assert_eq!(modal.field_text("nome"), "");
        assert!(modal.field_flag("ativo"));
    }

    #[test]
    fn test_open_create_requires_permission() {
        let (_mock, ctl, mut modal) = setup();
        let err = ctl.open_create(&PermissionSet::none(), &mut modal).unwrap_err();
        assert_eq!(err, CrudError::PermissionDenied("criar registros"));
        assert!(!modal.open);
    }

    #[test]
    fn test_open_edit_populates_fields() {
        let (mock, ctl, mut modal) = setup();
        mock.reply(json!({"sucesso": true, "dados": {"id": 29, "nome": "Bahia", "sigla": "BA", "ativo": false}}));

        block_on(ctl.open_edit(&PermissionSet::all(), &mut modal, RecordId(29))).unwrap();

        assert!(modal.open);
        assert_eq!(modal.form.editing_id, Some(RecordId(29)));
        assert_eq!(modal.field_text("sigla"), "BA");
        assert!(!modal.field_flag("ativo"));
        assert_eq!(mock.last_call().unwrap().path, "/estados/29");
    }

    #[test]
    fn test_failed_open_edit_does_not_open() {
        let (mock, ctl, mut modal) = setup();
        mock.reply(json!({"sucesso": false, "mensagem": "Registro não encontrado"}));

        let result = block_on(ctl.open_edit(&PermissionSet::all(), &mut modal, RecordId(29)));

        assert!(result.is_err());
        assert!(!modal.open);
        assert_eq!(modal.form.editing_id, None);
    }

    #[test]
    fn test_create_posts_to_collection() {
        let (mock, ctl, mut modal) = setup();
        mock.reply(json!({"sucesso": true, "dados": {"id": 1}}));
        ctl.open_create(&PermissionSet::all(), &mut modal).unwrap();
        modal.set_field("nome", "Bahia");
        modal.set_field("sigla", "ba");

        let outcome = block_on(ctl.submit(&mut modal)).unwrap();

        assert_eq!(outcome, SubmitOutcome::Saved);
        let call = mock.last_call().unwrap();
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.path, "/estados");
        assert_eq!(call.body, Some(json!({"nome": "Bahia", "sigla": "BA", "ativo": true})));
        assert!(!modal.open);
    }

    #[test]
    fn test_update_puts_to_item() {
        let (mock, ctl, mut modal) = setup();
        mock.reply(json!({"sucesso": true}));
        let fields = FormFields::new()
            .with("nome", "Bahia")
            .with("sigla", "BA")
            .with("ativo", true);
        ctl.apply_edit(&mut modal, RecordId(29), fields);

        block_on(ctl.submit(&mut modal)).unwrap();

        let call = mock.last_call().unwrap();
        assert_eq!(call.method, Method::Put);
        assert_eq!(call.path, "/estados/29");
    }

    #[test]
    fn test_local_validation_blocks_request() {
        let (mock, ctl, mut modal) = setup();
        ctl.open_create(&PermissionSet::all(), &mut modal).unwrap();
        modal.set_field("sigla", "BAH");

        let err = block_on(ctl.submit(&mut modal)).unwrap_err();

        assert!(matches!(err, CrudError::Validation(_)));
        assert_eq!(mock.call_count(), 0);
        assert!(modal.open);
        assert!(modal.field_error("nome").is_some());
        assert!(modal.field_error("sigla").is_some());
    }

    #[test]
    fn test_server_field_errors_keep_modal_open() {
        let (mock, ctl, mut modal) = setup();
        mock.reply(json!({"sucesso": false, "erros": {"nome": "obrigatório"}}));
        ctl.open_create(&PermissionSet::all(), &mut modal).unwrap();
        modal.set_field("nome", "Bahia");
        modal.set_field("sigla", "BA");

        let err = block_on(ctl.submit(&mut modal)).unwrap_err();

        assert!(matches!(err, CrudError::Server { .. }));
        assert!(modal.open);
        assert!(!modal.saving);
        assert_eq!(modal.form.editing_id, None);
        assert_eq!(modal.field_error("nome").as_deref(), Some("obrigatório"));
        assert!(modal.errors.general.is_some());
    }

    #[test]
    fn test_second_submit_while_saving_is_ignored() {
        let (mock, ctl, mut modal) = setup();
        ctl.open_create(&PermissionSet::all(), &mut modal).unwrap();
        modal.set_field("nome", "Bahia");
        modal.set_field("sigla", "BA");

        let first = ctl.prepare_submit(&mut modal).unwrap();
        assert!(first.is_some());
        assert!(modal.saving);
        assert_eq!(ctl.prepare_submit(&mut modal).unwrap(), None);
        assert_eq!(block_on(ctl.submit(&mut modal)).unwrap(), SubmitOutcome::Ignored);
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_close_resets_everything() {
        let (_mock, ctl, mut modal) = setup();
        ctl.apply_edit(&mut modal, RecordId(4), FormFields::new().with("nome", "Acre"));
        modal.errors.general = Some("erro".into());
        ctl.close(&mut modal);
        assert_eq!(modal, EntityFormModal::<StateEntity>::initial_state());
    }
}
