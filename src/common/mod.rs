//! Shared infrastructure helpers

pub mod logging;
