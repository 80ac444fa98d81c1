//! Generic error handling utilities
//!
//! Unified fatal-path error logging that works across the bootstrap's error
//! types while keeping domain-specific detail available at debug level.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)` with an actionable message; when it returns `false`,
/// `user_message()` must return `None`. Bootstrap errors are almost always
/// system errors: the user driving the host application cannot fix an
/// unsupported interpreter or a broken sub-module, so they get generic
/// context while the detail goes to the debug log.
pub trait ContextualError: std::error::Error {
    /// True if this error carries a specific, user-actionable message
    fn is_user_actionable(&self) -> bool;

    /// The specific user message, present exactly when the error is
    /// user-actionable
    fn user_message(&self) -> Option<&str>;
}

/// Log an error with appropriate detail level based on error specificity
///
/// User-actionable errors surface their own message; system errors surface
/// the operation context instead, with the full error pushed down to debug
/// level so status displays are not overwhelmed.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    if error.is_user_actionable() {
        if let Some(user_msg) = error.user_message() {
            log::error!("FATAL: {}", user_msg);
        } else {
            log::error!("FATAL: {}", operation_context);
        }
    } else {
        log::error!("FATAL: {}", operation_context);
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct TestUserError {
        message: String,
    }

    impl fmt::Display for TestUserError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl std::error::Error for TestUserError {}

    impl ContextualError for TestUserError {
        fn is_user_actionable(&self) -> bool {
            true
        }

        fn user_message(&self) -> Option<&str> {
            Some(&self.message)
        }
    }

    #[derive(Debug)]
    struct TestSystemError;

    impl fmt::Display for TestSystemError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "internal failure")
        }
    }

    impl std::error::Error for TestSystemError {}

    impl ContextualError for TestSystemError {
        fn is_user_actionable(&self) -> bool {
            false
        }

        fn user_message(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_user_error_contract() {
        let error = TestUserError {
            message: "pick a supported host version".to_string(),
        };
        assert!(error.is_user_actionable());
        assert_eq!(error.user_message(), Some("pick a supported host version"));
    }

    #[test]
    fn test_system_error_contract() {
        let error = TestSystemError;
        assert!(!error.is_user_actionable());
        assert!(error.user_message().is_none());
    }

    #[test]
    fn test_logging_does_not_panic_for_either_kind() {
        log_error_with_context(
            &TestUserError {
                message: "actionable".to_string(),
            },
            "Bootstrap",
        );
        log_error_with_context(&TestSystemError, "Bootstrap");
    }
}
