use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::WorkerId,
    protocol::{AckResponse, Envelope, ToggleOffRequest, ToggleOffResponse, UpdateWorkerOrderRequest},
};
use tracing::debug;
use url::Url;

pub mod error;

pub use error::{ClientError, ClientResult};

pub const DEFAULT_ORDER_PATH: &str = "/update_worker_order";
pub const DEFAULT_TOGGLE_PATH: &str = "/toggle_off_worker/{id}";
const WORKER_ID_PLACEHOLDER: &str = "{id}";

/// The two write endpoints the roster page talks to.
#[async_trait]
pub trait RosterApi: Send + Sync {
    /// Persist the full worker order. Identical submissions must be safe to repeat.
    async fn update_worker_order(&self, order: &[WorkerId]) -> ClientResult<()>;

    /// Ask the backend to set `worker_id`'s off-duty flag to `desired_is_off`.
    /// Returns the state the backend actually stored.
    async fn toggle_off_worker(&self, worker_id: WorkerId, desired_is_off: bool)
        -> ClientResult<bool>;
}

/// Endpoint paths relative to the server base URL. Deployments mount the
/// roster routes under different prefixes, so both are configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub order_path: String,
    pub toggle_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            order_path: DEFAULT_ORDER_PATH.into(),
            toggle_path: DEFAULT_TOGGLE_PATH.into(),
        }
    }
}

impl Endpoints {
    fn validate(&self) -> ClientResult<()> {
        if !self.toggle_path.contains(WORKER_ID_PLACEHOLDER) {
            return Err(ClientError::Endpoint(format!(
                "toggle path '{}' must contain the {WORKER_ID_PLACEHOLDER} placeholder",
                self.toggle_path
            )));
        }
        Ok(())
    }

    pub fn toggle_path_for(&self, worker_id: WorkerId) -> String {
        self.toggle_path
            .replace(WORKER_ID_PLACEHOLDER, &worker_id.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct RosterClient {
    http: Client,
    base_url: Url,
    endpoints: Endpoints,
}

impl RosterClient {
    pub fn new(server_url: &str) -> ClientResult<Self> {
        Self::with_endpoints(server_url, Endpoints::default())
    }

    pub fn with_endpoints(server_url: &str, endpoints: Endpoints) -> ClientResult<Self> {
        endpoints.validate()?;
        let mut base_url = Url::parse(server_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Endpoint(format!(
                "server url '{server_url}' cannot be used as a base"
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: Client::new(),
            base_url,
            endpoints,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn endpoint_url(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn post_envelope<B, T>(&self, url: Url, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Envelope,
    {
        let response = self.http.post(url.clone()).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // The backend answers validation and storage failures with a JSON
        // envelope and a 4xx/5xx status, so the body is decoded first.
        let envelope: T = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(err) if status.is_success() => return Err(ClientError::Decode(err)),
            Err(_) => {
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                })
            }
        };

        if !envelope.success() {
            return Err(ClientError::Rejected {
                message: envelope.message().unwrap_or_default().to_string(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        debug!(%url, status = status.as_u16(), "roster request settled");
        Ok(envelope)
    }
}

#[async_trait]
impl RosterApi for RosterClient {
    async fn update_worker_order(&self, order: &[WorkerId]) -> ClientResult<()> {
        let url = self.endpoint_url(&self.endpoints.order_path)?;
        let request = UpdateWorkerOrderRequest {
            order: order.to_vec(),
        };
        self.post_envelope::<_, AckResponse>(url, &request).await?;
        Ok(())
    }

    async fn toggle_off_worker(
        &self,
        worker_id: WorkerId,
        desired_is_off: bool,
    ) -> ClientResult<bool> {
        let url = self.endpoint_url(&self.endpoints.toggle_path_for(worker_id))?;
        let request = ToggleOffRequest {
            is_off: desired_is_off,
        };
        let response: ToggleOffResponse = self.post_envelope(url, &request).await?;
        response.is_off.ok_or_else(|| {
            ClientError::InvalidResponse(format!(
                "toggle response for worker {worker_id} is missing is_off"
            ))
        })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
