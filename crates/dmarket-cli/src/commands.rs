/*
[INPUT]:  Signed client, game id, pricing choices
[OUTPUT]: Target-creation payloads and API responses
[POS]:    Workflow layer - multi-step caller logic built on the signed call
[UPDATE]: When the target workflow or its defaults change
*/

use anyhow::{Context, Result};
use dmarket_client::{CreateTargetsRequest, DmarketClient, MarketOffer, Price, Target};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

/// Prices used when turning an offer into a target
#[derive(Debug, Clone)]
pub struct TargetPricing {
    pub price: Decimal,
    pub owner_gets: Decimal,
    pub currency: String,
}

impl Default for TargetPricing {
    fn default() -> Self {
        Self {
            price: Decimal::from(2),
            owner_gets: Decimal::from(1),
            currency: "USD".to_string(),
        }
    }
}

/// Wrap one offer into a single-target creation request
pub fn build_target_request(offer: &MarketOffer, pricing: &TargetPricing) -> CreateTargetsRequest {
    let target = Target::from_offer(
        offer,
        Price::new(pricing.price, pricing.currency.clone()),
        Price::new(pricing.owner_gets, pricing.currency.clone()),
    );
    CreateTargetsRequest {
        targets: vec![target],
    }
}

/// Read the first market offer for `game_id`, then create a target for it.
///
/// With `dry_run` the request body is returned instead of being posted.
pub async fn create_target_from_market(
    client: &DmarketClient,
    game_id: &str,
    pricing: &TargetPricing,
    dry_run: bool,
) -> Result<Value> {
    let offer = client
        .first_offer(game_id, &pricing.currency)
        .await
        .context("fetch market offer")?;
    info!(title = %offer.title, game_id = %offer.game_id, "offer selected");

    let request = build_target_request(&offer, pricing);
    if dry_run {
        info!("dry-run requested; target not submitted");
        return serde_json::to_value(&request).context("serialize target request");
    }

    client
        .create_targets(&request)
        .await
        .context("create target")
}
