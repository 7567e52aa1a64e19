use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, one_of};

/// 有期权合约的交易所
pub const DERIVATIVE_EXCHANGES: &[&str] = &["NFO", "BFO", "MCX", "CDS"];
pub const MAX_STRIKE_COUNT: u32 = 50;

/// # Summary
/// 期权链查询。`strike_count` 为平值上下各取的行权价档数。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionChainRequest {
    #[schema(example = "NFO")]
    pub exchange: String,
    #[schema(example = "NIFTY")]
    #[validate(length(min = 1, max = 30))]
    pub underlying: String,
    #[schema(example = "2026-10-29")]
    #[validate(length(min = 1, max = 20))]
    pub expiry: String,
    pub strike_count: Option<u32>,
}

impl Guarded for OptionChainRequest {
    fn check(&self) -> Result<(), Rejection> {
        one_of("exchange", &self.exchange, DERIVATIVE_EXCHANGES)?;
        match self.strike_count {
            Some(count) if !(1..=MAX_STRIKE_COUNT).contains(&count) => Err(
                Rejection::InvalidRequest(format!("strikeCount must be 1..={MAX_STRIKE_COUNT}")),
            ),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryRequest {
    pub exchange: String,
    #[validate(length(min = 1, max = 30))]
    pub underlying: String,
}

impl Guarded for ExpiryRequest {
    fn check(&self) -> Result<(), Rejection> {
        one_of("exchange", &self.exchange, DERIVATIVE_EXCHANGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_count_bounds() {
        let mut req = OptionChainRequest {
            exchange: "NFO".into(),
            underlying: "NIFTY".into(),
            expiry: "2026-10-29".into(),
            strike_count: None,
        };
        assert!(req.check().is_ok());
        req.strike_count = Some(0);
        assert!(req.check().is_err());
        req.strike_count = Some(50);
        assert!(req.check().is_ok());
        req.exchange = "NSE".into();
        assert!(req.check().is_err());
    }
}
