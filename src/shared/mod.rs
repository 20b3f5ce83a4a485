//! Cross-cutting helpers shared by adapters and binaries.

pub mod config;
