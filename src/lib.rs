pub mod actions;
pub mod app;
pub mod common;
pub mod core;
pub mod host;
pub mod modules;
pub mod registration;
pub mod reload;
pub mod runtime;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the API version string from build script into u32
pub fn get_plugin_api_version() -> u32 {
    PLUGIN_API_VERSION.parse().unwrap_or(20260801)
}
