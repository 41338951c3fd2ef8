use thiserror::Error;

/// Failures that end a single submit cycle. None of them stop the app.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Body could not be encoded for the chosen content type; nothing was sent
    #[error("Invalid request body: {0}")]
    BodyEncoding(String),

    /// Network, DNS, TLS, timeout or URL failure reported by the transport
    #[error("{0}")]
    Transport(String),

    /// The response declared JSON but its body did not parse
    #[error("Failed to decode response body: {0}")]
    ResponseDecoding(String),
}

impl AppError {
    /// Build a transport error from the error and every cause beneath it
    pub fn transport(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        AppError::Transport(message)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::BodyEncoding(_) => "BodyEncodingError",
            AppError::Transport(_) => "TransportError",
            AppError::ResponseDecoding(_) => "ResponseDecodingError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Connection refused (os error 111)")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    impl std::error::Error for Inner {}

    #[test]
    fn test_transport_error_includes_source_chain() {
        let err = AppError::transport(&Outer(Inner));
        assert_eq!(
            err.to_string(),
            "error sending request: Connection refused (os error 111)"
        );
        assert_eq!(err.kind(), "TransportError");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::BodyEncoding("EOF while parsing".to_string()).to_string(),
            "Invalid request body: EOF while parsing"
        );
        assert_eq!(
            AppError::ResponseDecoding("expected value".to_string()).kind(),
            "ResponseDecodingError"
        );
    }
}
