//! Application Layer
//!
//! Use cases that turn driver requests into single store calls.
//! They see the store only through the `DriverRepository` port.

pub mod use_cases;
