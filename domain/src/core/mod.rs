//! Core domain concepts shared across the subdomains.
//!
//! - [`error::DomainError`]: argument and request validation errors
//! - [`string`]: text helpers used when shaping tool output

pub mod error;
pub mod string;
