//! Error macros for graphws

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}

/// Macro for creating parse errors at a given line
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $reason:expr) => {
        return Err($crate::error::GraphError::parse($line, $reason))
    };
}
