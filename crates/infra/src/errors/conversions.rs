//! Conversions from external infrastructure errors into domain errors.

use msfchat_domain::MsfChatError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side.
#[derive(Debug)]
pub struct InfraError(pub MsfChatError);

impl InfraError {
    /// Message without the domain category prefix
    pub fn detail(&self) -> &str {
        match &self.0 {
            MsfChatError::Config(message)
            | MsfChatError::Network(message)
            | MsfChatError::Auth(message)
            | MsfChatError::InvalidInput(message)
            | MsfChatError::Internal(message) => message,
        }
    }
}

trait IntoMsfChatError {
    fn into_msfchat(self) -> MsfChatError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MsfChatError */
/* -------------------------------------------------------------------------- */

impl IntoMsfChatError for HttpError {
    fn into_msfchat(self) -> MsfChatError {
        if self.is_timeout() {
            return MsfChatError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return MsfChatError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return MsfChatError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return MsfChatError::Network(format!("failed to read HTTP response body: {self}"));
        }

        MsfChatError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_msfchat())
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::Client;

    use super::*;

    #[tokio::test]
    async fn malformed_url_maps_to_invalid_input() {
        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get("not a url").send().await.unwrap_err();

        let infra = InfraError::from(error);
        assert!(matches!(infra.0, MsfChatError::InvalidInput(_)));
        assert!(infra.detail().starts_with("invalid HTTP request"));
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let infra = InfraError::from(error);
        assert_eq!(infra.detail(), "HTTP connection failure");
        assert!(matches!(infra.0, MsfChatError::Network(_)));
    }
}
