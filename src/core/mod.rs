pub mod fetcher;
pub mod presenter;
pub mod session;

pub use crate::domain::model::Order;
pub use crate::domain::ports::{OrderSource, ServiceLocator};
pub use crate::utils::error::Result;
