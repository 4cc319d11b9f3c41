pub mod bootstrap;
pub mod gate;

pub use bootstrap::{PermissionBootstrap, PermissionTimeout};
pub use gate::{fetch_granted, PageAccess, PermissionGate, PermissionSource};
