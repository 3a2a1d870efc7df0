//! Core module for `argot`.
//! See [documentation root](https://docs.rs/argot/latest/argot/index.html) for full details.
#![warn(missing_docs)]
mod api;
mod constant;
mod dictionary;
mod error;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod schema;

pub use api::*;
pub use dictionary::Dictionary;
pub use error::{ConfigError, ParseError, ParseErrorKind, QueryError};
pub use model::Nargs;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
