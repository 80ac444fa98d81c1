//! Core services and infrastructure

pub mod context;
pub mod error_handling;
pub mod version;
