/*
[INPUT]:  Game ids, item titles, target payloads
[OUTPUT]: Market data (last sales, offers) and target creation responses
[POS]:    HTTP layer - typed wrappers over the signed call
[UPDATE]: When adding new endpoints or changing response format
*/

use serde_json::{Value, json};

use crate::http::{DmarketClient, DmarketError, Result};
use crate::types::{CreateTargetsRequest, MarketItems, MarketOffer};

pub const LAST_SALES_PATH: &str = "/trade-aggregator/v1/last-sales";
pub const MARKET_ITEMS_PATH: &str = "/exchange/v1/market/items";
pub const CREATE_TARGET_PATH: &str = "/exchange/v1/target/create";

impl DmarketClient {
    /// Recent sales of one item
    ///
    /// GET /trade-aggregator/v1/last-sales?gameId={game_id}&title={title}
    pub async fn last_sales(&self, game_id: &str, title: &str) -> Result<Value> {
        let params = json!({
            "gameId": game_id,
            "title": title,
        });
        self.call("GET", LAST_SALES_PATH, Some(&params)).await
    }

    /// Market offers for a game
    ///
    /// GET /exchange/v1/market/items?gameId={game_id}&limit={limit}&currency={currency}
    pub async fn market_items(
        &self,
        game_id: &str,
        limit: u32,
        currency: &str,
    ) -> Result<MarketItems> {
        let params = json!({
            "gameId": game_id,
            "limit": limit,
            "currency": currency,
        });
        let value = self.call("GET", MARKET_ITEMS_PATH, Some(&params)).await?;
        serde_json::from_value(value).map_err(|e| {
            DmarketError::InvalidResponse(format!("unexpected market items shape: {e}"))
        })
    }

    /// First market offer for a game
    pub async fn first_offer(&self, game_id: &str, currency: &str) -> Result<MarketOffer> {
        self.market_items(game_id, 1, currency)
            .await?
            .objects
            .into_iter()
            .next()
            .ok_or_else(|| {
                DmarketError::InvalidResponse("no objects found in market response".into())
            })
    }

    /// Create buy targets
    ///
    /// POST /exchange/v1/target/create
    pub async fn create_targets(&self, req: &CreateTargetsRequest) -> Result<Value> {
        self.call_with("POST", CREATE_TARGET_PATH, req).await
    }
}
