use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, count_within};

pub const MAX_SCRIPS_PER_CALL: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWatchlistRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[schema(example = "Banks")]
    #[validate(length(min = 1, max = 20))]
    pub name: String,
}

impl Guarded for CreateWatchlistRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenameWatchlistRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub watchlist_id: String,
    #[validate(length(min = 1, max = 20))]
    pub name: String,
}

impl Guarded for RenameWatchlistRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistIdRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub watchlist_id: String,
}

impl Guarded for WatchlistIdRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

/// 自选列表中的一只证券
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scrip {
    #[schema(example = "NSE")]
    pub exchange: String,
    #[schema(example = "2885")]
    pub token: String,
}

/// # Summary
/// 批量添加或删除自选证券。
///
/// # Invariants
/// - 每次 1..=50 只，且每只证券的交易所与代码均非空。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistScripsRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub watchlist_id: String,
    pub scrips: Vec<Scrip>,
}

impl Guarded for WatchlistScripsRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        count_within("scrips", self.scrips.len(), 1, MAX_SCRIPS_PER_CALL)?;
        if self
            .scrips
            .iter()
            .any(|s| s.exchange.trim().is_empty() || s.token.trim().is_empty())
        {
            return Err(Rejection::InvalidRequest("scrip exchange and token are required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrips_bounds() {
        let scrip = Scrip {
            exchange: "NSE".into(),
            token: "2885".into(),
        };
        let mut req = WatchlistScripsRequest {
            client_id: "AB1234".into(),
            watchlist_id: "1".into(),
            scrips: vec![scrip.clone()],
        };
        assert!(req.check().is_ok());

        req.scrips = vec![scrip; MAX_SCRIPS_PER_CALL + 1];
        assert!(req.check().is_err());

        req.scrips = vec![Scrip {
            exchange: "NSE".into(),
            token: " ".into(),
        }];
        assert!(req.check().is_err());
    }
}
