//! Error types for the SlideShare API.

use thiserror::Error;

/// Main error type for all SlideShare operations.
#[derive(Debug, Error)]
pub enum SlideshareError {
    /// An argument was missing or outside what the web-method accepts.
    ///
    /// Raised locally, before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The service answered with a `SlideShareServiceError` document.
    #[error("Error ({code}): {message}")]
    Service {
        /// Numeric error code assigned by SlideShare.
        code: u32,
        /// Message sent along with the code.
        message: String,
    },

    /// The service answered with a non-success HTTP status and no error document.
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// XML response could not be mapped onto a model.
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::de::DeError),

    /// A value inside an otherwise well-formed response could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SlideshareError {
    /// Shorthand for building an [`SlideshareError::InvalidArgument`].
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        SlideshareError::InvalidArgument(msg.into())
    }

    /// Remote error code, if this error came from the service.
    pub fn service_code(&self) -> Option<u32> {
        match self {
            SlideshareError::Service { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for SlideShare operations.
pub type Result<T> = std::result::Result<T, SlideshareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = SlideshareError::Service {
            code: 9,
            message: "SlideShow Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Error (9): SlideShow Not Found");
        assert_eq!(err.service_code(), Some(9));
    }

    #[test]
    fn test_invalid_argument_has_no_code() {
        let err = SlideshareError::invalid("tag cannot be empty");
        assert_eq!(err.service_code(), None);
        assert!(err.to_string().contains("tag cannot be empty"));
    }
}
