//! Capability profile resolution for the host's embedded script runtime
//!
//! Resolution happens exactly once per bootstrap context, before any module is
//! touched. The resolved profile is immutable and injected by reference into
//! every component that needs it.

use crate::runtime::error::{RuntimeError, RuntimeResult};

/// Version of the host's embedded script interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
}

impl RuntimeVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Module-reload primitive available in the host runtime
///
/// Interpreter generation 2 exposes reload as a global built-in, so no
/// dedicated primitive is needed. Generation 3 moved it into a support
/// library, and relocated it again in 3.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadPrimitive {
    /// Generation 2: reload is a global built-in operation
    Builtin,
    /// Generation 3 before 3.4
    Legacy,
    /// Generation 3.4 and later
    Modern,
}

/// Resolved runtime capabilities, immutable after resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityProfile {
    pub version: RuntimeVersion,
    pub reload_primitive: ReloadPrimitive,
}

/// Resolve the capability profile for a host runtime version
///
/// Fails with `UnsupportedRuntime` for any interpreter generation other than
/// 2 or 3. This is fatal for the bootstrap: without a known reload strategy
/// the plugin cannot safely re-initialize inside the host process.
pub fn resolve_capabilities(version: RuntimeVersion) -> RuntimeResult<CapabilityProfile> {
    let reload_primitive = match (version.major, version.minor) {
        (2, _) => ReloadPrimitive::Builtin,
        (3, minor) if minor < 4 => ReloadPrimitive::Legacy,
        (3, _) => ReloadPrimitive::Modern,
        _ => {
            return Err(RuntimeError::UnsupportedRuntime {
                major: version.major,
                minor: version.minor,
            })
        }
    };

    log::trace!(
        "Resolved reload primitive {:?} for runtime {}",
        reload_primitive,
        version
    );

    Ok(CapabilityProfile {
        version,
        reload_primitive,
    })
}
