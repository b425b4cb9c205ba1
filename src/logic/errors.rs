use crate::api::DriveError;
use std::error::Error as StdError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    Api,     // Provider returned an error payload
    Timeout, // Only with request_timeout_secs configured
    Network, // DNS, connect, TLS, ...
    Parse,   // Body was not the JSON we expected
}

/// Classify a client error for display
pub fn classify_error(error: &DriveError) -> ErrorType {
    match error {
        DriveError::Api { .. } => ErrorType::Api,
        DriveError::Network(e) if e.is_timeout() => ErrorType::Timeout,
        DriveError::Network(_) => ErrorType::Network,
        DriveError::Parse(_) => ErrorType::Parse,
    }
}

/// Message shown in the error view
///
/// Provider messages are shown verbatim; transport problems get a generic line
/// (the details go to the debug log).
pub fn user_message(error: &DriveError) -> String {
    match classify_error(error) {
        ErrorType::Api => error.to_string(),
        ErrorType::Timeout => "The storage provider took too long to respond.".to_string(),
        ErrorType::Network => "Failed to load files. Please try again.".to_string(),
        ErrorType::Parse => "Unexpected response from the storage provider.".to_string(),
    }
}

/// Walk the error chain down to the root cause
pub fn format_error_detail(error: &DriveError) -> String {
    let mut source = StdError::source(error);
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
