//! Typed wrappers over the transport, one per remote concern.
mod ad;
mod game;
mod investigation;
mod shop;

pub use ad::AdService;
pub use game::GameService;
pub use investigation::InvestigationService;
pub use shop::ShopService;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(ApiError::Decode)
}
