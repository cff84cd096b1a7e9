//! CLI command handlers, one per file.

mod ext;
mod get;
mod name;
mod sniff;

pub use ext::run_ext;
pub use get::{run_get, GetArgs};
pub use name::{run_name, NameArgs};
pub use sniff::run_sniff;
