pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::ServiceConfig;
pub use crate::core::{
    fetcher::OrderClient,
    presenter::OutputFormat,
    session::{LookupOutcome, OrderLookup},
};
pub use crate::domain::model::{Delivery, Item, Order, Payment};
pub use crate::utils::error::{LookupError, Result};
