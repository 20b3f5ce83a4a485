//! Result persistence adapters. Implement ResultStore.

pub mod json_file;

pub use json_file::JsonFileStore;
