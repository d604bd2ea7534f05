//! Statement parameters: values only, never interpolated into SQL text.

pub mod params;
pub use params::*;
