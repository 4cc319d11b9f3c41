//! Loads pages of an entity into a [`ListState`] and deletes rows.
//!
//! Loading is split into `begin_load` / `fetch` / `finish_load` so the view
//! layer can keep its signal borrows short; `load` chains the three for
//! callers that own the state.

use super::confirm::Confirmer;
use super::entity::CrudEntity;
use super::list_state::{ListQuery, ListState};
use super::sequence::{RequestSequence, Ticket};
use crate::shared::api::{call, decode, CrudError, Method, SharedClient};
use contracts::shared::{ListPayload, PagedList};
use contracts::system::permissions::PermissionSet;
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub ticket: Ticket,
    pub query: ListQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied,
    /// Applied, but the page was clamped and must be loaded again
    NeedsReload,
    /// A newer load was started; this answer was dropped
    Stale,
    Failed(CrudError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
}

pub struct EntityListController<E: CrudEntity> {
    client: SharedClient,
    sequence: RequestSequence,
    _entity: PhantomData<E>,
}

impl<E: CrudEntity> Clone for EntityListController<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            sequence: self.sequence.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: CrudEntity> EntityListController<E> {
    pub fn new(client: SharedClient) -> Self {
        Self {
            client,
            sequence: RequestSequence::new(),
            _entity: PhantomData,
        }
    }

    pub fn begin_load(&self, state: &mut ListState<E::Record>) -> LoadRequest {
        state.loading = true;
        let request = LoadRequest {
            ticket: self.sequence.next(),
            query: state.query(),
        };
        log::debug!("{}: load {:?} page {}", E::KEY, request.ticket, request.query.page);
        request
    }

    pub async fn fetch(&self, request: &LoadRequest) -> Result<PagedList<E::Record>, CrudError> {
        let path = request.query.path(E::ENDPOINT);
        let payload: ListPayload<E::Record> =
            match call(self.client.as_ref(), Method::Get, &path, None).await? {
                Some(value) if !value.is_null() => decode(value)?,
                _ => ListPayload::Bare(Vec::new()),
            };
        Ok(payload.into_page(request.query.page, request.query.page_size))
    }

    pub fn finish_load(
        &self,
        state: &mut ListState<E::Record>,
        request: &LoadRequest,
        result: Result<PagedList<E::Record>, CrudError>,
    ) -> LoadOutcome {
        if !self.sequence.is_current(request.ticket) {
            log::warn!("{}: dropping stale response {:?}", E::KEY, request.ticket);
            return LoadOutcome::Stale;
        }
        match result {
            Ok(page) => {
                if state.apply_page(page) {
                    LoadOutcome::NeedsReload
                } else {
                    LoadOutcome::Applied
                }
            }
            Err(err) => {
                log::error!("{}: load failed: {}", E::KEY, err);
                state.apply_failure(err.user_message());
                LoadOutcome::Failed(err)
            }
        }
    }

    pub async fn load(&self, state: &mut ListState<E::Record>) -> LoadOutcome {
        let mut outcome = self.load_once(state).await;
        if outcome == LoadOutcome::NeedsReload {
            outcome = self.load_once(state).await;
        }
        outcome
    }

    async fn load_once(&self, state: &mut ListState<E::Record>) -> LoadOutcome {
        let request = self.begin_load(state);
        let result = self.fetch(&request).await;
        self.finish_load(state, &request, result)
    }

    pub async fn set_filter(
        &self,
        state: &mut ListState<E::Record>,
        key: &str,
        value: &str,
    ) -> LoadOutcome {
        state.set_filter(key, value);
        self.load(state).await
    }

    /// `None` when already on the last page
    pub async fn next_page(&self, state: &mut ListState<E::Record>) -> Option<LoadOutcome> {
        if !state.next_page() {
            return None;
        }
        Some(self.load(state).await)
    }

    /// `None` when already on page 1
    pub async fn prev_page(&self, state: &mut ListState<E::Record>) -> Option<LoadOutcome> {
        if !state.prev_page() {
            return None;
        }
        Some(self.load(state).await)
    }

    /// Confirm, then `DELETE /{entity}/{id}`. The caller reloads on `Deleted`.
    pub async fn delete(
        &self,
        perms: &PermissionSet,
        record: &E::Record,
        confirmer: &dyn Confirmer,
    ) -> Result<DeleteOutcome, CrudError> {
        if !perms.delete || E::READ_ONLY {
            return Err(CrudError::PermissionDenied("excluir registros"));
        }
        let message = format!("Deseja excluir \"{}\"?", E::display_name(record));
        if !confirmer.confirm(&message) {
            return Ok(DeleteOutcome::Cancelled);
        }
        let id = E::record_id(record);
        call(self.client.as_ref(), Method::Delete, &E::item_path(id), None).await?;
        log::debug!("{}: deleted {}", E::KEY, id);
        Ok(DeleteOutcome::Deleted)
    }
}
