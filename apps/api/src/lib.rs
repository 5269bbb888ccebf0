//! Heuristic resume parser: PDF/DOCX bytes in, structured candidate record out.

pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod parser;
pub mod routes;
pub mod state;

pub use errors::ParseError;
pub use models::{ParsedResume, RawDocument};
pub use parser::{parse, parse_with};
