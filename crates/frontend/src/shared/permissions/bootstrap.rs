//! One-shot publication of the session's granted codes.
//!
//! The sidebar fetches `/permissoes/usuario` once and publishes the result;
//! every page waits on the same shared future instead of fetching again.

use contracts::system::permissions::GrantedPermissions;
use futures::channel::oneshot;
use futures::future::{self, Either, FutureExt, Shared};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Tempo esgotado aguardando as permissões do usuário")]
pub struct PermissionTimeout;

#[derive(Clone)]
pub struct PermissionBootstrap {
    sender: Rc<RefCell<Option<oneshot::Sender<GrantedPermissions>>>>,
    resolved: Shared<oneshot::Receiver<GrantedPermissions>>,
}

impl Default for PermissionBootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionBootstrap {
    pub fn new() -> Self {
        let (sender, receiver) = oneshot::channel();
        Self {
            sender: Rc::new(RefCell::new(Some(sender))),
            resolved: receiver.shared(),
        }
    }

    /// Resolve every waiter. Only the first call has an effect.
    pub fn publish(&self, granted: GrantedPermissions) -> bool {
        match self.sender.borrow_mut().take() {
            Some(sender) => {
                log::debug!("Permission bootstrap published ({} codes)", granted.len());
                sender.send(granted).is_ok()
            }
            None => {
                log::warn!("Permission bootstrap already published, ignoring");
                false
            }
        }
    }

    /// Wait for the published codes, or until `deadline` completes
    pub async fn wait<D>(&self, deadline: D) -> Result<GrantedPermissions, PermissionTimeout>
    where
        D: Future<Output = ()>,
    {
        let deadline = Box::pin(deadline);
        match future::select(self.resolved.clone(), deadline).await {
            Either::Left((Ok(granted), _)) => Ok(granted),
            // Sender dropped without publishing
            Either::Left((Err(_), _)) => Err(PermissionTimeout),
            Either::Right(((), _)) => Err(PermissionTimeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_published_before_wait() {
        let bootstrap = PermissionBootstrap::new();
        assert!(bootstrap.publish(GrantedPermissions::new(["cidades.visualizar"])));
        let granted = block_on(bootstrap.wait(future::pending::<()>())).unwrap();
        assert!(granted.can("cidades.visualizar"));
    }

    #[test]
    fn test_every_waiter_gets_the_same_codes() {
        let bootstrap = PermissionBootstrap::new();
        let other = bootstrap.clone();
        bootstrap.publish(GrantedPermissions::new(["a.visualizar"]));
        let first = block_on(bootstrap.wait(future::pending::<()>())).unwrap();
        let second = block_on(other.wait(future::pending::<()>())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_only_first_publish_counts() {
        let bootstrap = PermissionBootstrap::new();
        assert!(bootstrap.publish(GrantedPermissions::new(["a.visualizar"])));
        assert!(!bootstrap.publish(GrantedPermissions::empty()));
        let granted = block_on(bootstrap.wait(future::pending::<()>())).unwrap();
        assert!(granted.can("a.visualizar"));
    }

    #[test]
    fn test_deadline_elapses_before_publish() {
        let bootstrap = PermissionBootstrap::new();
        let result = block_on(bootstrap.wait(future::ready(())));
        assert_eq!(result, Err(PermissionTimeout));
    }
}
