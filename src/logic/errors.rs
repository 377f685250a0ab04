//! Error classification for reference-data loads
//!
//! Turns an `anyhow::Error` from a catalog refresh into a category and a
//! short message suitable for a toast.

use anyhow::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404 or missing file
    ServerError,  // HTTP 500+
    Parse,        // Malformed catalog document or response
    NetworkError, // DNS, routing, etc.
    Other,
}

impl ErrorType {
    pub fn label(self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "Connection refused",
            ErrorType::Timeout => "Timed out",
            ErrorType::NotFound => "Not found",
            ErrorType::ServerError => "Server error",
            ErrorType::Parse => "Invalid data",
            ErrorType::NetworkError => "Network error",
            ErrorType::Other => "Error",
        }
    }
}

fn has_cause<T: std::error::Error + 'static>(error: &Error) -> bool {
    error.chain().any(|cause| cause.downcast_ref::<T>().is_some())
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if let Some(status) = reqwest_err.status() {
                return match status.as_u16() {
                    404 => ErrorType::NotFound,
                    500..=599 => ErrorType::ServerError,
                    _ => ErrorType::Other,
                };
            }
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_decode() {
                return ErrorType::Parse;
            }
        }
        if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                return ErrorType::NotFound;
            }
        }
    }

    if has_cause::<serde_yaml::Error>(error) || has_cause::<serde_json::Error>(error) {
        return ErrorType::Parse;
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Deepest cause in the error chain
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

/// Toast text for a failed catalog refresh
pub fn refresh_failure_message(error: &Error) -> String {
    format!(
        "Error: {} while loading filters ({})",
        classify_error(error).label(),
        format_error_message(error)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_connection_refused() {
        let err = anyhow::anyhow!("Connection Refused (os error 111)");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_timeout() {
        let err = anyhow::anyhow!("request timed out");
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn test_classify_network_in_context() {
        let err = anyhow::anyhow!("dns lookup failed").context("Failed to fetch makes");
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn test_classify_missing_file() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::new(io).context("Failed to read catalog file catalog.yaml");
        assert_eq!(classify_error(&err), ErrorType::NotFound);
    }

    #[test]
    fn test_classify_parse_error() {
        let err = crate::catalog::parse_catalog("makes: [1, 2").unwrap_err();
        assert_eq!(classify_error(&err), ErrorType::Parse);
    }

    #[test]
    fn test_classify_other_error() {
        let err = anyhow::anyhow!("something odd");
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_format_shows_root_cause() {
        let err = anyhow::anyhow!("tcp connect error").context("Failed to fetch makes");
        assert_eq!(format_error_message(&err), "tcp connect error");
    }

    #[test]
    fn test_refresh_failure_message() {
        let err = anyhow::anyhow!("request timed out");
        assert_eq!(
            refresh_failure_message(&err),
            "Error: Timed out while loading filters (request timed out)"
        );
    }
}
