pub mod ast;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod lexer;
pub mod numeric;
pub mod parser;
pub mod config;

pub use ast::{Document, Value};
pub use error::{ConfigError, ParseError};
pub use config::CfgDocument;
pub use parser::{Parser, parse};
