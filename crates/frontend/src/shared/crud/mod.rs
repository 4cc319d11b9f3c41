//! Generic CRUD machinery shared by every list page

pub mod confirm;
pub mod entity;
pub mod field_view;
pub mod form_fields;
pub mod form_modal;
pub mod form_state;
pub mod list_controller;
pub mod list_state;
pub mod lookup;
pub mod page;
pub mod sequence;
pub mod view_model;

pub use entity::CrudEntity;
pub use page::entity_page;
