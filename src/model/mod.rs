mod field;
mod record;
mod validation;

pub use field::Field;
pub use record::Record;
pub use validation::{Errors, ValidationError, validate, validate_field};
