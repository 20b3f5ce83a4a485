//! post-sentiment: fetch placeholder posts, score their sentiment, render and optionally save.
//! Hexagonal layout: domain, ports, adapters, use cases.

pub mod adapters;
pub mod calendar;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
