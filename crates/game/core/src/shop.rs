//! Shop inventory and purchase outcomes.
use serde::{Deserialize, Serialize};

/// One purchasable item. The inventory is replaced wholesale on fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub cost: u32,
}

/// Authoritative result of buying one item.
///
/// Carries the post-purchase `gold`, `lives`, `level`, and `turn`; a purchase
/// never changes score, so no score fields exist on this payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOutcome {
    pub shopping_success: bool,
    pub gold: u32,
    pub lives: i32,
    pub level: u32,
    pub turn: u32,
}
