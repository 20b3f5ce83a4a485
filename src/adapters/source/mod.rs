//! Post source adapters. Implement PostSource.

pub mod jsonplaceholder;

pub use jsonplaceholder::JsonPlaceholderSource;
