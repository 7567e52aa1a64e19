use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, count_within, one_of, positive, positive_int, required};

/// IPO 所处阶段
pub const IPO_STAGES: &[&str] = &["OPEN", "UPCOMING", "CLOSED", "LISTED"];
/// 单个申购最多的报价档数
pub const MAX_IPO_BIDS: usize = 3;

/// IPO 列表查询串 (`?stage=`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct IpoStageQuery {
    pub stage: Option<String>,
}

impl Guarded for IpoStageQuery {
    fn check(&self) -> Result<(), Rejection> {
        let stage = self.stage.as_deref().unwrap_or_default();
        required("stage", stage)?;
        one_of("stage", stage, IPO_STAGES)
    }
}

/// 已校验阶段的 IPO 列表请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IpoStageRequest {
    #[schema(example = "OPEN")]
    pub stage: String,
}

impl From<IpoStageQuery> for IpoStageRequest {
    fn from(query: IpoStageQuery) -> Self {
        Self {
            stage: query.stage.unwrap_or_default(),
        }
    }
}

/// 单档申购报价
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IpoBid {
    #[schema(example = 14)]
    pub quantity: i64,
    #[schema(example = 285.0)]
    pub price: f64,
    /// 以发行价上限申购，此时 `price` 不参与校验
    #[serde(default)]
    pub cut_off: bool,
}

/// # Summary
/// IPO 申购请求体。
///
/// # Invariants
/// - 报价档数 1..=3；非 cut-off 档位价格为正。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IpoOrderRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 30))]
    pub symbol: String,
    #[schema(example = "trader@okaxis")]
    #[validate(length(min = 3, max = 100))]
    pub upi_id: String,
    pub bids: Vec<IpoBid>,
}

impl Guarded for IpoOrderRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        count_within("bids", self.bids.len(), 1, MAX_IPO_BIDS)?;
        self.bids.iter().try_for_each(|bid| {
            positive_int("quantity", bid.quantity)?;
            if bid.cut_off {
                Ok(())
            } else {
                positive("price", bid.price)
            }
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IpoCancelRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub application_no: String,
}

impl Guarded for IpoCancelRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_enumeration() {
        let query = IpoStageQuery {
            stage: Some("OPEN".into()),
        };
        assert!(query.check().is_ok());
        assert!(IpoStageQuery::default().check().is_err());
        assert!(
            IpoStageQuery {
                stage: Some("open".into())
            }
            .check()
            .is_err()
        );
    }

    #[test]
    fn test_cut_off_bid_skips_price() {
        let mut req = IpoOrderRequest {
            client_id: "AB1234".into(),
            symbol: "ACME".into(),
            upi_id: "trader@okaxis".into(),
            bids: vec![IpoBid {
                quantity: 14,
                price: 0.0,
                cut_off: true,
            }],
        };
        assert!(req.check().is_ok());

        req.bids[0].cut_off = false;
        assert!(req.check().is_err());
    }
}
