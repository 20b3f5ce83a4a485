//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the web adapter into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::FormHandler;
pub use outbound::{PostSource, ResultStore, SentimentModel};
