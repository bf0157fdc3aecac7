//! Error types for the front end.
//!
//! This module defines the two error kinds that cross the crate boundary:
//!
//! - Lexical errors, which carry enough position information to render
//!   a caret under the offending character
//! - Parse errors, which carry a message describing the expected construct

pub mod errors;
