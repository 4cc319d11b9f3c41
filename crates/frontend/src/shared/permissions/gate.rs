//! Turns the session's granted codes into the capabilities of one page.
//!
//! Both sources fail closed: a failed fetch or an elapsed wait yields an
//! empty grant list, so the page shows the permission-denied banner.

use super::bootstrap::PermissionBootstrap;
use crate::shared::api::{call, decode, ApiClient, CrudError, Method, SharedClient};
use contracts::system::permissions::{
    GrantedPermissions, PermissionSet, UserPermissions, USER_PERMISSIONS_PATH,
};
use std::future::Future;

/// `GET /permissoes/usuario`
pub async fn fetch_granted(client: &dyn ApiClient) -> Result<GrantedPermissions, CrudError> {
    let permissions: UserPermissions =
        match call(client, Method::Get, USER_PERMISSIONS_PATH, None).await? {
            Some(value) if !value.is_null() => decode(value)?,
            _ => UserPermissions::default(),
        };
    Ok(permissions.into())
}

#[derive(Clone)]
pub enum PermissionSource {
    /// One call of its own
    Direct(SharedClient),
    /// Whatever the sidebar bootstrap publishes
    Bootstrap(PermissionBootstrap),
}

#[derive(Clone)]
pub struct PermissionGate {
    source: PermissionSource,
}

impl PermissionGate {
    pub fn new(source: PermissionSource) -> Self {
        Self { source }
    }

    /// Granted codes; `deadline` bounds the bootstrap wait only
    pub async fn granted<D>(&self, deadline: D) -> GrantedPermissions
    where
        D: Future<Output = ()>,
    {
        match &self.source {
            PermissionSource::Direct(client) => match fetch_granted(client.as_ref()).await {
                Ok(granted) => granted,
                Err(e) => {
                    log::error!("Failed to load user permissions: {}", e);
                    GrantedPermissions::empty()
                }
            },
            PermissionSource::Bootstrap(bootstrap) => match bootstrap.wait(deadline).await {
                Ok(granted) => granted,
                Err(timeout) => {
                    log::warn!("{}; treating as no permissions", timeout);
                    GrantedPermissions::empty()
                }
            },
        }
    }

    pub async fn resolve<D>(&self, prefix: &str, read_only: bool, deadline: D) -> PermissionSet
    where
        D: Future<Output = ()>,
    {
        let set = PermissionSet::for_prefix(&self.granted(deadline).await, prefix);
        if read_only {
            set.read_only()
        } else {
            set
        }
    }
}

/// Page level state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    ResolvingPermissions,
    Denied,
    Granted(PermissionSet),
}

impl PageAccess {
    pub fn from_permissions(set: PermissionSet) -> Self {
        if set.view {
            PageAccess::Granted(set)
        } else {
            PageAccess::Denied
        }
    }

    pub fn permissions(&self) -> PermissionSet {
        match self {
            PageAccess::Granted(set) => *set,
            _ => PermissionSet::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockApiClient;
    use futures::executor::block_on;
    use futures::future;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn test_direct_source_derives_set() {
        let mock = Rc::new(MockApiClient::new());
        mock.reply(json!({"sucesso": true, "dados": {"permissoes": ["cidades.visualizar", "cidades.editar"]}}));
        let gate = PermissionGate::new(PermissionSource::Direct(mock.clone()));

        let set = block_on(gate.resolve("cidades", false, future::pending::<()>()));

        assert_eq!(
            set,
            PermissionSet {
                view: true,
                create: false,
                edit: true,
                delete: false
            }
        );
        assert_eq!(mock.last_call().unwrap().path, USER_PERMISSIONS_PATH);
    }

    #[test]
    fn test_direct_failure_fails_closed() {
        let mock = Rc::new(MockApiClient::new());
        mock.reply(json!({"sucesso": false, "mensagem": "erro"}));
        let gate = PermissionGate::new(PermissionSource::Direct(mock));
        let set = block_on(gate.resolve("cidades", false, future::pending::<()>()));
        assert_eq!(PageAccess::from_permissions(set), PageAccess::Denied);
    }

    #[test]
    fn test_bootstrap_timeout_fails_closed() {
        let gate = PermissionGate::new(PermissionSource::Bootstrap(PermissionBootstrap::new()));
        let granted = block_on(gate.granted(future::ready(())));
        assert!(granted.is_empty());
    }

    #[test]
    fn test_read_only_drops_write_capabilities() {
        let bootstrap = PermissionBootstrap::new();
        bootstrap.publish(GrantedPermissions::new([
            "auditoria.visualizar",
            "auditoria.excluir",
        ]));
        let gate = PermissionGate::new(PermissionSource::Bootstrap(bootstrap));
        let set = block_on(gate.resolve("auditoria", true, future::pending::<()>()));
        let expected = PermissionSet {
            view: true,
            ..PermissionSet::none()
        };
        assert_eq!(PageAccess::from_permissions(set), PageAccess::Granted(expected));
    }
}
