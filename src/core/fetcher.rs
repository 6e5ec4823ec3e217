use crate::core::{Order, OrderSource, Result, ServiceLocator};
use crate::utils::error::LookupError;
use reqwest::{Client, StatusCode};
use url::Url;

/// reqwest-backed [`OrderSource`] talking to `GET {base}/orders/{id}`.
pub struct OrderClient {
    base_url: Url,
    client: Client,
}

impl OrderClient {
    pub fn new<L: ServiceLocator>(locator: &L) -> Result<Self> {
        Self::with_base_url(&locator.base_url())
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| LookupError::InvalidConfigValueError {
            field: "service".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    /// The ID is pushed as a single path segment, so reserved characters are
    /// percent-encoded rather than interpreted. `.` and `..` are dot segments
    /// in every encoding URL parsers accept, so they are refused outright.
    pub fn order_url(&self, order_id: &str) -> Result<Url> {
        if order_id == "." || order_id == ".." {
            return Err(LookupError::UnroutableOrderId {
                order_id: order_id.to_string(),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::ConfigError {
                message: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .push("orders")
            .push(order_id);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl OrderSource for OrderClient {
    async fn fetch(&self, order_id: &str) -> Result<Order> {
        let url = self.order_url(order_id)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let order: Order = serde_json::from_slice(&body)?;
        tracing::debug!("Decoded order {} with {} items", order.order_uid, order.items.len());

        Ok(order)
    }
}
