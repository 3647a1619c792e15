#![forbid(unsafe_code)]

pub mod definition;
pub mod error;
pub mod ident;
pub mod query;
pub mod types;

pub use crate::definition::{parse_definition_str, DefinitionFormat, ParsedDefinition};
pub use crate::error::{CoreError, ParseError, ValidationError};
pub use crate::ident::{split_uid, validate_id, validate_uid};
pub use crate::query::QueryParams;
