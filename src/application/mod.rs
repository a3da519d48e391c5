//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `OrderEngine`, the single entry point for driving
//! an order through its lifecycle against the injected registry.

pub mod engine;
