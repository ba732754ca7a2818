//! HTTP adapter for the pickup backend.
//!
//! Only consumes the existing REST API: log in, list today's pickups, mark
//! one complete. Wire DTOs stay private; callers get [`Pickup`] values.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geo::GeoPoint;
use crate::pickup::Pickup;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

impl BackendConfig {
    /// Reads `REFRESH_API_BASE_URL` and `REFRESH_API_TIMEOUT_SECS`, keeping
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("REFRESH_API_BASE_URL").unwrap_or(defaults.base_url);
        let timeout_secs = std::env::var("REFRESH_API_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        Self {
            base_url,
            timeout_secs,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Debug)]
pub enum BackendError {
    Http(reqwest::Error),
    /// Non-2xx reply, with whatever text the server sent back.
    Status { code: u16, message: String },
    /// The server answered `success: false`.
    Rejected(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Http(err)
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Http(err) => write!(f, "request failed: {}", err),
            BackendError::Status { code, message } if message.is_empty() => {
                write!(f, "server returned status {}", code)
            }
            BackendError::Status { code, message } => {
                write!(f, "server returned status {}: {}", code, message)
            }
            BackendError::Rejected(message) => write!(f, "server rejected request: {}", message),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::Http(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            client,
            token: None,
        })
    }

    /// Use an existing bearer token for later calls.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Log in and keep the returned token for later calls.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, BackendError> {
        debug!(email, "logging in");
        let response = self
            .client
            .post(self.config.endpoint("api/auth/login"))
            .json(&LoginRequest { email, password })
            .send()?;
        let session: Session = check_status(response)?.json()?;
        self.token = Some(session.token.clone());
        Ok(session)
    }

    /// Pickups assigned for `date` (`YYYY-MM-DD`).
    pub fn today_pickups(&self, date: &str) -> Result<Vec<Pickup>, BackendError> {
        let response = self
            .authorized(self.client.get(self.config.endpoint("api/pickup/get-today-pickup")))
            .query(&[("today", date)])
            .send()?;
        let pickups: Vec<PickupDto> = check_status(response)?.json()?;
        debug!(date, count = pickups.len(), "fetched pickups");

        Ok(pickups.into_iter().map(PickupDto::into_pickup).collect())
    }

    pub fn complete_pickup(&self, pickup_id: &str, completed_at: Option<&str>) -> Result<(), BackendError> {
        debug!(pickup_id, "completing pickup");
        let response = self
            .authorized(self.client.post(self.config.endpoint("api/pickup/complete")))
            .json(&CompletePickupRequest {
                pickup_id,
                completed_at,
            })
            .send()?;
        let body = check_status(response)?.text()?;

        // a 2xx is enough; only an explicit `success: false` is a failure
        if body.trim().is_empty() {
            return Ok(());
        }
        match serde_json::from_str::<ApiEnvelope>(&body) {
            Ok(ApiEnvelope { success: false, message }) => {
                let message = message.unwrap_or_default();
                warn!(pickup_id, %message, "pickup completion rejected");
                Err(BackendError::Rejected(message))
            }
            Ok(_) => Ok(()),
            Err(err) => {
                debug!(pickup_id, error = %err, "completion reply is not an envelope");
                Ok(())
            }
        }
    }

    fn authorized(&self, request: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(status = status.as_u16(), url = %response.url(), "backend returned error status");
        let message = response.text().unwrap_or_default().trim().to_string();
        Err(BackendError::Status {
            code: status.as_u16(),
            message,
        })
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletePickupRequest<'a> {
    pickup_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    success: bool,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressDto {
    name: Option<String>,
    road_name_address: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PickupDto {
    pickup_id: String,
    address: Option<AddressDto>,
    pickup_date: Option<String>,
    #[serde(default)]
    is_completed: bool,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PickupDto {
    fn into_pickup(self) -> Pickup {
        let location = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        };
        let label = self
            .address
            .and_then(|address| {
                address
                    .road_name_address
                    .filter(|value| !value.is_empty())
                    .or(address.name.filter(|value| !value.is_empty()))
            })
            .unwrap_or_else(|| self.pickup_id.clone());

        Pickup {
            id: self.pickup_id,
            location,
            label,
            completed: self.is_completed,
            pickup_date: self.pickup_date.filter(|value| !value.is_empty()),
        }
    }
}
