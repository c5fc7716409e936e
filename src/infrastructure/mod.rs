//! Infrastructure Layer
//!
//! The HTTP surface (driving adapters) and the PostgreSQL store,
//! configuration and pool setup (driven adapters).

pub mod driven_adapters;
pub mod driving_adapters;
