//! Form module.
//!
//! Describes the multi-step measurement forms: which fields exist,
//! the order each form asks for them, and the raw answers collected.

mod collected;
mod field;
mod form_kind;

pub use collected::CollectedValues;
pub use field::Field;
pub use form_kind::{FormKind, CROP_FIELDS, FERTILIZER_FIELDS};
