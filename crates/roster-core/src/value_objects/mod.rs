//! Value objects - immutable types and pure normalizers for domain concepts

mod email;
mod phone;
mod record_id;

pub use email::{generate_unique_email, EmailDirectory, DEFAULT_EMAIL_DOMAIN};
pub use phone::{is_valid_phone, normalize_phone};
pub use record_id::{RecordId, RecordIdParseError};
