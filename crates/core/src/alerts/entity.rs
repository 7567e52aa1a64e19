use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, one_of, positive};

/// 价格提醒触发条件
pub const ALERT_CONDITIONS: &[&str] = &["ABOVE", "BELOW"];

/// # Summary
/// 新建价格提醒请求体。
///
/// # Invariants
/// - `price` 为正数，`condition` 属于 [`ALERT_CONDITIONS`]。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetAlertRequest {
    #[schema(example = "AB1234")]
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[schema(example = "NSE")]
    #[validate(length(min = 1, max = 10))]
    pub exchange: String,
    #[schema(example = "2885")]
    #[validate(length(min = 1, max = 20))]
    pub token: String,
    #[schema(example = "RELIANCE-EQ")]
    #[validate(length(min = 1, max = 50))]
    pub trading_symbol: String,
    #[schema(example = "ABOVE")]
    pub condition: String,
    #[schema(example = 2950.5)]
    pub price: f64,
    pub note: Option<String>,
}

impl Guarded for SetAlertRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        one_of("condition", &self.condition, ALERT_CONDITIONS)?;
        positive("price", self.price)
    }
}

/// 修改价格提醒请求体
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditAlertRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub alert_id: String,
    pub condition: String,
    pub price: f64,
}

impl Guarded for EditAlertRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        one_of("condition", &self.condition, ALERT_CONDITIONS)?;
        positive("price", self.price)
    }
}

/// 按提醒 ID 操作的请求体
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertIdRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub alert_id: String,
}

impl Guarded for AlertIdRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(condition: &str, price: f64) -> SetAlertRequest {
        SetAlertRequest {
            client_id: "AB1234".into(),
            exchange: "NSE".into(),
            token: "2885".into(),
            trading_symbol: "RELIANCE-EQ".into(),
            condition: condition.into(),
            price,
            note: None,
        }
    }

    #[test]
    fn test_alert_condition_and_price() {
        assert!(alert("ABOVE", 10.0).check().is_ok());
        assert!(alert("EQUAL", 10.0).check().is_err());
        assert!(alert("BELOW", 0.0).check().is_err());
    }
}
