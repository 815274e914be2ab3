/*
[INPUT]:  Market offer JSON and target pricing choices
[OUTPUT]: Typed offers, prices, and target-creation payloads
[POS]:    Data layer - type definitions for the target workflow
[UPDATE]: When the market item or target schema changes
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money amount as the API expects it: decimal string plus currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl Price {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferExtra {
    #[serde(default)]
    pub category_path: String,
}

/// One item from `GET /exchange/v1/market/items`.
///
/// Only the fields the target workflow reads are kept; missing ones default
/// to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOffer {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub extra: OfferExtra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketItems {
    #[serde(default)]
    pub objects: Vec<MarketOffer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAttributes {
    pub game_id: String,
    pub category_path: String,
    pub title: String,
    pub name: String,
    pub image: String,
    pub owner_gets: Price,
}

/// A buy order ("target") for a specific item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub amount: u32,
    pub game_id: String,
    pub price: Price,
    pub attributes: TargetAttributes,
}

impl Target {
    /// Build a single-unit target mirroring the given market offer
    pub fn from_offer(offer: &MarketOffer, price: Price, owner_gets: Price) -> Self {
        Self {
            amount: 1,
            game_id: offer.game_id.clone(),
            price,
            attributes: TargetAttributes {
                game_id: offer.game_id.clone(),
                category_path: offer.extra.category_path.clone(),
                title: offer.title.clone(),
                name: offer.title.clone(),
                image: offer.image.clone(),
                owner_gets,
            },
        }
    }
}

/// Body of `POST /exchange/v1/target/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTargetsRequest {
    pub targets: Vec<Target>,
}
