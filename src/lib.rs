//! src/lib.rs
pub mod configuration;
pub mod domain;
pub mod error;
pub mod form;
pub mod subscribe_client;
pub mod telemetry;
