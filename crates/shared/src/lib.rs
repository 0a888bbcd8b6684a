//! Shared configuration and tracing setup for the trader engine.
//!
//! This crate provides the cross-cutting pieces used by the other crates:
//! - Engine configuration (division scale, rounding mode)
//! - Logging configuration and tracing subscriber initialisation

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, EngineConfig, LoggingConfig, RoundingMode};
