use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::TRANSACTION_TYPES;
use crate::common::guard::{Guarded, Rejection, count_within, one_of, positive, positive_int};

/// 每个市场分段允许的子分段
pub const SEGMENTS: &[(&str, &[&str])] = &[
    ("EQUITY", &["INTRADAY", "DELIVERY"]),
    ("DERIVATIVES", &["FUTURES", "OPTIONS"]),
    ("CURRENCY", &["FUTURES", "OPTIONS"]),
    ("COMMODITY", &["FUTURES", "OPTIONS"]),
];

pub const MAX_CHARGE_LEGS: usize = 20;

/// # Summary
/// 单笔委托的费用估算参数。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChargeLeg {
    #[schema(example = "EQUITY")]
    pub segment: String,
    #[schema(example = "DELIVERY")]
    pub sub_segment: String,
    #[schema(example = "NSE")]
    #[validate(length(min = 1, max = 10))]
    pub exchange: String,
    #[schema(example = "BUY")]
    pub transaction_type: String,
    #[schema(example = 10)]
    pub quantity: i64,
    #[schema(example = 1520.35)]
    pub price: f64,
}

impl ChargeLeg {
    /// 字段约束通过，且分段与子分段成对合法
    pub fn check(&self) -> Result<(), Rejection> {
        Validate::validate(self).map_err(|e| Rejection::InvalidRequest(e.to_string()))?;
        let subs = SEGMENTS
            .iter()
            .find(|(segment, _)| *segment == self.segment)
            .map(|(_, subs)| *subs)
            .ok_or_else(|| {
                Rejection::InvalidRequest(format!("unknown segment {:?}", self.segment))
            })?;
        one_of("subSegment", &self.sub_segment, subs)?;
        one_of("transactionType", &self.transaction_type, TRANSACTION_TYPES)?;
        positive_int("quantity", self.quantity)?;
        positive("price", self.price)
    }
}

/// 单笔经纪费用估算请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrokerageChargesRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[serde(flatten)]
    pub leg: ChargeLeg,
}

impl Guarded for BrokerageChargesRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        self.leg.check()
    }
}

/// 多笔委托合并估算请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedChargesRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    pub legs: Vec<ChargeLeg>,
}

impl Guarded for CombinedChargesRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        count_within("legs", self.legs.len(), 1, MAX_CHARGE_LEGS)?;
        self.legs.iter().try_for_each(ChargeLeg::check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(segment: &str, sub_segment: &str) -> ChargeLeg {
        ChargeLeg {
            segment: segment.into(),
            sub_segment: sub_segment.into(),
            exchange: "NSE".into(),
            transaction_type: "BUY".into(),
            quantity: 10,
            price: 100.0,
        }
    }

    #[test]
    fn test_segment_pairs() {
        assert!(leg("EQUITY", "INTRADAY").check().is_ok());
        assert!(leg("COMMODITY", "OPTIONS").check().is_ok());
        assert!(leg("EQUITY", "FUTURES").check().is_err());
        assert!(leg("BONDS", "DELIVERY").check().is_err());
    }

    #[test]
    fn test_flattened_wire_shape() {
        let req: BrokerageChargesRequest = serde_json::from_str(
            r#"{"clientId":"AB1234","segment":"EQUITY","subSegment":"DELIVERY","exchange":"NSE","transactionType":"SELL","quantity":5,"price":10.5}"#,
        )
        .unwrap();
        assert_eq!(req.leg.sub_segment, "DELIVERY");
        assert!(req.check().is_ok());
    }

    #[test]
    fn test_combined_requires_legs() {
        let req = CombinedChargesRequest {
            client_id: "AB1234".into(),
            legs: vec![],
        };
        assert!(req.check().is_err());

        let mut bad = leg("EQUITY", "DELIVERY");
        bad.quantity = 0;
        let req = CombinedChargesRequest {
            client_id: "AB1234".into(),
            legs: vec![leg("EQUITY", "DELIVERY"), bad],
        };
        assert!(req.check().is_err());
    }

    #[test]
    fn test_leg_exchange_length_is_enforced() {
        let mut empty = leg("EQUITY", "DELIVERY");
        empty.exchange = String::new();
        assert!(empty.check().is_err());

        let mut long = leg("EQUITY", "DELIVERY");
        long.exchange = "X".repeat(50);
        let req = BrokerageChargesRequest {
            client_id: "AB1234".into(),
            leg: long.clone(),
        };
        assert!(req.check().is_err());

        let req = CombinedChargesRequest {
            client_id: "AB1234".into(),
            legs: vec![leg("EQUITY", "DELIVERY"), long],
        };
        assert!(req.check().is_err());
    }
}
