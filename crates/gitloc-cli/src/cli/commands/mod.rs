//! CLI command handlers, one per file.

mod config;
mod parse;
mod resolve;

pub use config::run_config;
pub use parse::run_parse;
pub use resolve::run_resolve;

#[cfg(test)]
pub(crate) use parse::format_components;
#[cfg(test)]
pub(crate) use resolve::format_info;
