use crate::domain::model::Order;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can hand back a single order by its identifier.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch(&self, order_id: &str) -> Result<Order>;
}

pub trait ServiceLocator: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn base_url(&self) -> String {
        format!("http://{}:{}", self.host(), self.port())
    }
}
