use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, count_within, one_of};

pub const INDICATOR_INTERVALS: &[&str] = &["1m", "5m", "15m", "1h", "1d"];
pub const MAX_INDICATORS: usize = 10;

/// # Summary
/// 技术指标计算请求，例如 `["RSI14", "SMA50"]`。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRequest {
    #[validate(length(min = 1, max = 10))]
    pub exchange: String,
    #[validate(length(min = 1, max = 20))]
    pub token: String,
    #[schema(example = "1d")]
    pub interval: String,
    pub indicators: Vec<String>,
}

impl Guarded for IndicatorRequest {
    fn check(&self) -> Result<(), Rejection> {
        one_of("interval", &self.interval, INDICATOR_INTERVALS)?;
        count_within("indicators", self.indicators.len(), 1, MAX_INDICATORS)
    }
}
