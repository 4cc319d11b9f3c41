//! Common types shared by all back-office records

pub mod record_id;

pub use record_id::RecordId;

/// Serde default for `ativo` flags the backend sometimes omits
pub fn default_active() -> bool {
    true
}
