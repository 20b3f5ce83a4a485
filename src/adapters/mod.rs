//! Infrastructure adapters. Implement ports.
//!
//! Posts API, sentiment models, filesystem, HTTP front end. Map errors to DomainError.

pub mod persistence;
pub mod sentiment;
pub mod source;
pub mod web;
