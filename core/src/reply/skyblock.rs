use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ReplyStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyBlockProfileReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    #[serde(default)]
    pub profile: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyBlockNewsReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    #[serde(default)]
    pub items: Vec<NewsItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// The item shown next to the entry in game.
    #[serde(default)]
    pub item: Option<Value>,
}

/// One page of active auctions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyBlockAuctionsReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    pub page: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    #[serde(rename = "totalAuctions", default)]
    pub total_auctions: i64,
    #[serde(rename = "lastUpdated", default, with = "crate::codec::value::option")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auctions: Vec<Value>,
}

impl SkyBlockAuctionsReply {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyBlockBazaarReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    #[serde(rename = "lastUpdated", default, with = "crate::codec::value::option")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub products: BTreeMap<String, BazaarProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BazaarProduct {
    pub product_id: String,
    #[serde(default)]
    pub sell_summary: Vec<BazaarOrder>,
    #[serde(default)]
    pub buy_summary: Vec<BazaarOrder>,
    pub quick_status: BazaarQuickStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BazaarOrder {
    pub amount: i64,
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: f64,
    pub orders: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BazaarQuickStatus {
    pub product_id: String,
    pub sell_price: f64,
    pub sell_volume: i64,
    pub sell_moving_week: i64,
    pub sell_orders: i64,
    pub buy_price: f64,
    pub buy_volume: i64,
    pub buy_moving_week: i64,
    pub buy_orders: i64,
}
