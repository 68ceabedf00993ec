use anvaya_types::ErrorBody;
use thiserror::Error;

/// Fallback shown when the server did not provide a usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-success status. `message` is the
    /// server-provided text verbatim where available.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Builds an API error from a status code and the (possibly empty or
    /// unparseable) response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        ClientError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfaces_server_error_field_verbatim() {
        let err = ClientError::from_response(404, r#"{"error":"Lead not found."}"#);
        assert_eq!(err.to_string(), "Lead not found.");
    }

    #[test]
    fn joins_validation_messages() {
        let err = ClientError::from_response(
            400,
            r#"{"errors":["Lead name is required","Invalid lead source"]}"#,
        );
        assert_eq!(
            err.to_string(),
            "Lead name is required; Invalid lead source"
        );
    }

    #[test]
    fn falls_back_to_generic_message() {
        let err = ClientError::from_response(500, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), GENERIC_ERROR_MESSAGE);

        let err = ClientError::from_response(500, "{}");
        assert_eq!(err.to_string(), GENERIC_ERROR_MESSAGE);
    }
}
