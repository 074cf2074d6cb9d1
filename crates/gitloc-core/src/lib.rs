//! Parsing and repository resolution for `git://` style resource locators.
//!
//! A locator such as `git:///srv/repo/src/lib.rs#v1.0?depth=1` names a file
//! inside a repository at a revision. [`locator::parse_locator`] splits it
//! into components; [`PathInformation`] resolves those against a repository
//! found by a [`repository::RepositoryLocator`].

pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod path_info;
pub mod repository;

pub use error::{LocatorError, LocatorResult, RepositoryError};
pub use locator::{parse_locator, Arguments, ParsedComponents, GLOBAL_PATH_HOST};
pub use path_info::{PathInformation, DEFAULT_REF};
