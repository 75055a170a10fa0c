//! Classforge Core Types and Definitions
//!
//! This crate provides the foundational types for the Classforge code
//! generator. It includes:
//!
//! - **Identifiers**: Sanitized class identifiers derived from free-text
//!   labels ([`identifier::ClassName`])
//! - **Model**: The validated diagram model ([`model`] module) produced
//!   from the raw graph document ([`document`] module)
//! - **Lookup**: Name and attribute lookup tables over a validated model
//!   ([`lookup`] module)

pub mod document;
pub mod identifier;
pub mod lookup;
pub mod model;

mod error;

pub use error::ModelError;
