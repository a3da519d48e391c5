//! In-memory demo platform: a food-delivery order lifecycle and a social
//! posting domain, both driven through explicitly injected registries.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod social;
