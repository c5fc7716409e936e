//! Driving Adapters
//!
//! The axum REST API that drives the driver use cases.

pub mod api_rest;
