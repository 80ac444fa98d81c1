use crate::app::bootstrap::bootstrap;
use crate::common::logging::init_logging;
use crate::core::error_handling::log_error_with_context;
use crate::core::version::{build_time, get_api_version};
use crate::host::api::ConsoleHost;
use crate::runtime::api::RuntimeVersion;

/// Runtime version the console harness pretends the host embeds
const DEMO_RUNTIME: RuntimeVersion = RuntimeVersion { major: 3, minor: 9 };

/// Initialize the demo harness and run one bootstrap pass
pub fn startup() {
    if let Err(e) = init_logging(Some("info"), None, None, true) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    log::info!(
        "plugkit: plugin bootstrap starting (api {}, built {})",
        get_api_version(),
        build_time()
    );

    let mut host = ConsoleHost::new(DEMO_RUNTIME);

    match bootstrap(&mut host) {
        Ok(summary) => {
            log::info!("Bootstrap finished: {:?}", summary.outcome);
            for failure in &summary.registration.failures {
                log::warn!(
                    "Registration step '{}' did not complete: {}",
                    failure.step,
                    failure.error
                );
            }
            if summary.registration.is_complete() {
                log::info!("All UI affordances registered");
            }
        }
        Err(e) => {
            log_error_with_context(&e, "Plugin bootstrap");
            std::process::exit(1);
        }
    }
}
