use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, count_within, isin, positive_int};

pub const MAX_EDIS_SECURITIES: usize = 50;

/// 待授权出库的单只证券
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdisSecurity {
    #[schema(example = "INE002A01018")]
    pub isin: String,
    #[schema(example = 5)]
    pub quantity: i64,
}

/// # Summary
/// eDIS 卖出授权请求体。
///
/// # Invariants
/// - 证券数量 1..=50，每只证券 ISIN 合法且数量为正。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdisRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    pub securities: Vec<EdisSecurity>,
}

impl Guarded for EdisRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        count_within("securities", self.securities.len(), 1, MAX_EDIS_SECURITIES)?;
        self.securities.iter().try_for_each(|s| {
            isin("isin", &s.isin)?;
            positive_int("quantity", s.quantity)
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdisStatusRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 64))]
    pub request_id: String,
}

impl Guarded for EdisStatusRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edis_securities() {
        let mut req = EdisRequest {
            client_id: "AB1234".into(),
            securities: vec![EdisSecurity {
                isin: "INE002A01018".into(),
                quantity: 5,
            }],
        };
        assert!(req.check().is_ok());

        req.securities[0].quantity = 0;
        assert!(req.check().is_err());

        req.securities.clear();
        assert!(req.check().is_err());
    }
}
