//! Command-line interface module.

mod args;
pub mod apply;
pub mod common;
pub mod query;
pub mod validate;

pub use args::{Cli, Commands, Format, PageArgs};
