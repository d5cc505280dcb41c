//! HTTP client for the registration endpoint
//!
//! The endpoint is an opaque JSON API: requests carry an `{action, value}`
//! envelope, responses come back as `{error?, message}`. The client only
//! decides success or rejection; rendering the outcome is up to the UI.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::registration::Registration;

/// Request envelope understood by the endpoint
#[derive(Debug, Serialize)]
struct ApiRequest<T: Serialize> {
    action: String,
    value: T,
}

/// Response shape returned by the endpoint
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
}

/// Errors surfaced from a submission attempt
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(String),

    #[error("Registration service is unreachable. Please try again later.")]
    Http(#[from] reqwest::Error),
}

/// Client for the registration API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submit a registration and return the success message.
    ///
    /// A response with the `error` flag set is mapped to
    /// `ApiError::Rejected` carrying the server-provided message.
    pub async fn submit_registration(&self, registration: &Registration) -> Result<String, ApiError> {
        let request = ApiRequest {
            action: "registration".to_string(),
            value: registration.to_wire(),
        };

        debug!("Submitting registration to {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?;

        let body: ApiResponse = response.json().await?;
        if body.error {
            warn!("Registration rejected: {}", body.message);
            return Err(ApiError::Rejected(body.message));
        }

        info!("Registration accepted");
        Ok(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{RegistrationKind, TeamMember};

    #[test]
    fn test_request_envelope_shape() {
        let registration = Registration {
            kind: RegistrationKind::Team,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0700".to_string(),
            team_name: "Bit Benders".to_string(),
            members: vec![TeamMember {
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
            }],
            challenge: Some(1),
            terms_accepted: true,
            ..Default::default()
        };

        let request = ApiRequest {
            action: "registration".to_string(),
            value: registration.to_wire(),
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["action"], "registration");
        assert_eq!(json["value"]["type"], 2);
        assert_eq!(json["value"]["challenge"], 1);
    }

    #[test]
    fn test_response_decodes_with_missing_error_flag() {
        let body: ApiResponse =
            serde_json::from_str(r#"{"message": "See you at the hackathon!"}"#).unwrap();
        assert!(!body.error);
        assert_eq!(body.message, "See you at the hackathon!");

        let body: ApiResponse =
            serde_json::from_str(r#"{"error": true, "message": "Already registered."}"#).unwrap();
        assert!(body.error);
    }
}
