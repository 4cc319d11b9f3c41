pub mod envelope;
pub mod list;
pub mod validation;

pub use envelope::{ApiEnvelope, ApiFailure};
pub use list::{total_pages, ListPayload, PagedList};
pub use validation::{FieldErrors, FieldFormat, ValidationRules, Validator};
