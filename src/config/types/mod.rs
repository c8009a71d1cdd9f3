//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Type-safe field paths (`FIELDS` constants)   |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub(crate) use field::config_fields;
