pub mod permissions;
pub mod profile;
