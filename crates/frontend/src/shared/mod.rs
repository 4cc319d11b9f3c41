pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod export;
pub mod format;
pub mod html;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod permissions;
pub mod services;
