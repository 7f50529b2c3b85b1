/// Convenience macro for scoped logging at different levels.
/// Usage: `scoped_log!(debug, "teleport", "target {:?}", point)`
#[macro_export]
macro_rules! scoped_log {
    (error, $scope:expr, $($arg:tt)*) => {
        if $crate::logging::get_log_config().should_log($scope, $crate::logging::Level::ERROR) {
            tracing::error!(scope = $scope, $($arg)*);
        }
    };
    (warn, $scope:expr, $($arg:tt)*) => {
        if $crate::logging::get_log_config().should_log($scope, $crate::logging::Level::WARN) {
            tracing::warn!(scope = $scope, $($arg)*);
        }
    };
    (info, $scope:expr, $($arg:tt)*) => {
        if $crate::logging::get_log_config().should_log($scope, $crate::logging::Level::INFO) {
            tracing::info!(scope = $scope, $($arg)*);
        }
    };
    (debug, $scope:expr, $($arg:tt)*) => {
        if $crate::logging::get_log_config().should_log($scope, $crate::logging::Level::DEBUG) {
            tracing::debug!(scope = $scope, $($arg)*);
        }
    };
    (trace, $scope:expr, $($arg:tt)*) => {
        if $crate::logging::get_log_config().should_log($scope, $crate::logging::Level::TRACE) {
            tracing::trace!(scope = $scope, $($arg)*);
        }
    };
}

// Convenience macros for common scopes
#[macro_export]
macro_rules! teleport_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "teleport", $($arg)*);
    };
}

#[macro_export]
macro_rules! input_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "input", $($arg)*);
    };
}

#[macro_export]
macro_rules! scene_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "scene", $($arg)*);
    };
}

#[macro_export]
macro_rules! xr_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "xr", $($arg)*);
    };
}
