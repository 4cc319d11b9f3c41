//! Wire contracts shared by the dashboard frontend and the REST backend.
//!
//! - `shared`: response envelope, list payloads, field validation
//! - `domain`: records and payload DTOs of every back-office entity
//! - `system`: permissions and the user profile

pub mod domain;
pub mod shared;
pub mod system;
