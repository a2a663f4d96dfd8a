//! A line-oriented calculator: `expr ('>' name)?` statements over f64.

#![allow(nonstandard_style)]

pub mod builtins;
pub mod environment;
pub mod error_handling;
pub mod evaluating;
pub mod formatting;
pub mod lexing;
pub mod parsing;
pub mod scanning;
pub mod session;

pub use environment::{Environment, Value};
pub use error_handling::{CalcError, ErrorKind, Result};
pub use evaluating::evaluate_statement;
pub use scanning::{Scanner, StreamScanner, StringScanner};
pub use session::{Session, Summary};
