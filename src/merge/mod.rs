//! Configuration merging and dotted-path access.
//!
//! Both work on the serialized (`serde_json::Value`) form of a page
//! configuration. [`LandingPage`](crate::landing::LandingPage) turns the
//! result back into the typed tree.
//!
//! | Module   | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `policy` | Declarative merge depth per section             |
//! | `path`   | `get_path` / `set_path` over a value tree       |

mod path;
mod policy;

pub use path::{PathError, get_path, set_path, split_path};
pub use policy::{MergeRule, PAGE_MERGE, merge_value};
