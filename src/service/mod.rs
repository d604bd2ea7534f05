//! Request-level checks applied before any repository call.

mod validation;
pub use validation::{validate_date, RequestValidator, DATE_FORMAT};
