//! Browser-side services shared by every page.
//!
//! The API client and the permission bootstrap are `Rc`-based, so they live
//! in local arena storage and pages receive a `Copy` handle through context.

use super::api::SharedClient;
use super::permissions::PermissionBootstrap;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppServices {
    client: StoredValue<SharedClient, LocalStorage>,
    permissions: StoredValue<PermissionBootstrap, LocalStorage>,
}

impl AppServices {
    pub fn new(client: SharedClient, permissions: PermissionBootstrap) -> Self {
        Self {
            client: StoredValue::new_local(client),
            permissions: StoredValue::new_local(permissions),
        }
    }

    pub fn client(&self) -> SharedClient {
        self.client.get_value()
    }

    pub fn permissions(&self) -> PermissionBootstrap {
        self.permissions.get_value()
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices not found in context")
}
