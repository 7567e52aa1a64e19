//! 篮子下单相关请求体。
//!
//! 篮子接口沿用历史字段命名 (PascalCase，`LoginID`)，且以登录名而非客户号标识归属，
//! 因此不参与客户鉴权。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::TRANSACTION_TYPES;
use crate::common::guard::{Guarded, Rejection, one_of, positive_int};

pub const BASKET_NAME_MIN: usize = 1;
pub const BASKET_NAME_MAX: usize = 30;

pub const BASKET_TYPES: &[&str] = &["NORMAL", "SIP"];
pub const BASKET_PRODUCT_TYPES: &[&str] = &["ALL", "CNC", "MIS", "NRML"];
pub const BASKET_ORDER_TYPES: &[&str] = &["ALL", "MARKET", "LIMIT"];

/// # Summary
/// 创建篮子请求体。
///
/// # Invariants
/// - 名称长度越界时返回专用错误码 (INVALID NAME LENGTH)，而非通用的 INVALID REQUEST。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBasketRequest {
    #[serde(rename = "LoginID")]
    #[schema(example = "Login1")]
    #[validate(length(min = 1, max = 20))]
    pub login_id: String,
    #[schema(example = "XYZ")]
    pub name: String,
    #[serde(rename = "Type")]
    #[schema(example = "NORMAL")]
    pub basket_type: String,
    #[schema(example = "ALL")]
    pub product_type: String,
    #[schema(example = "ALL")]
    pub order_type: String,
}

impl Guarded for CreateBasketRequest {
    fn check(&self) -> Result<(), Rejection> {
        let len = self.name.trim().chars().count();
        if !(BASKET_NAME_MIN..=BASKET_NAME_MAX).contains(&len) {
            return Err(Rejection::InvalidNameLength {
                min: BASKET_NAME_MIN,
                max: BASKET_NAME_MAX,
            });
        }
        one_of("Type", &self.basket_type, BASKET_TYPES)?;
        one_of("ProductType", &self.product_type, BASKET_PRODUCT_TYPES)?;
        one_of("OrderType", &self.order_type, BASKET_ORDER_TYPES)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RenameBasketRequest {
    #[serde(rename = "LoginID")]
    #[validate(length(min = 1, max = 20))]
    pub login_id: String,
    #[serde(rename = "BasketID")]
    #[validate(length(min = 1, max = 40))]
    pub basket_id: String,
    #[validate(length(min = 1, max = 30))]
    pub name: String,
}

impl Guarded for RenameBasketRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct BasketIdRequest {
    #[serde(rename = "LoginID")]
    #[validate(length(min = 1, max = 20))]
    pub login_id: String,
    #[serde(rename = "BasketID")]
    #[validate(length(min = 1, max = 40))]
    pub basket_id: String,
}

impl Guarded for BasketIdRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct FetchBasketsRequest {
    #[serde(rename = "LoginID")]
    #[validate(length(min = 1, max = 20))]
    pub login_id: String,
}

impl Guarded for FetchBasketsRequest {}

/// # Summary
/// 向篮子添加一条委托。
///
/// # Invariants
/// - `quantity > 0`，`price >= 0` (市价单为 0)。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct BasketInstrumentRequest {
    #[serde(rename = "LoginID")]
    #[validate(length(min = 1, max = 20))]
    pub login_id: String,
    #[serde(rename = "BasketID")]
    #[validate(length(min = 1, max = 40))]
    pub basket_id: String,
    #[validate(length(min = 1, max = 10))]
    pub exchange: String,
    #[validate(length(min = 1, max = 20))]
    pub token: String,
    #[validate(length(min = 1, max = 50))]
    pub trading_symbol: String,
    pub transaction_type: String,
    pub product_type: String,
    pub order_type: String,
    pub quantity: i64,
    pub price: f64,
}

impl Guarded for BasketInstrumentRequest {
    fn check(&self) -> Result<(), Rejection> {
        one_of("TransactionType", &self.transaction_type, TRANSACTION_TYPES)?;
        positive_int("Quantity", self.quantity)?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Rejection::InvalidRequest(format!(
                "Price must not be negative, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteInstrumentRequest {
    #[serde(rename = "LoginID")]
    #[validate(length(min = 1, max = 20))]
    pub login_id: String,
    #[serde(rename = "BasketID")]
    #[validate(length(min = 1, max = 40))]
    pub basket_id: String,
    #[serde(rename = "InstrumentID")]
    #[validate(length(min = 1, max = 40))]
    pub instrument_id: String,
}

impl Guarded for DeleteInstrumentRequest {}

#[cfg(test)]
mod tests {
    use super::*;

    fn basket(name: &str) -> CreateBasketRequest {
        CreateBasketRequest {
            login_id: "Login1".into(),
            name: name.into(),
            basket_type: "NORMAL".into(),
            product_type: "ALL".into(),
            order_type: "ALL".into(),
        }
    }

    #[test]
    fn test_create_basket_wire_names() {
        let req: CreateBasketRequest = serde_json::from_str(
            r#"{"LoginID":"Login1","Name":"XYZ","Type":"NORMAL","ProductType":"ALL","OrderType":"ALL"}"#,
        )
        .unwrap();
        assert_eq!(req.login_id, "Login1");
        assert_eq!(req.basket_type, "NORMAL");
        assert!(req.check().is_ok());
    }

    #[test]
    fn test_basket_name_length_has_dedicated_rejection() {
        let expected = Err(Rejection::InvalidNameLength { min: 1, max: 30 });
        assert_eq!(basket("").check(), expected);
        assert_eq!(basket("   ").check(), expected);
        assert_eq!(basket(&"x".repeat(31)).check(), expected);
        assert!(basket(&"x".repeat(30)).check().is_ok());
    }

    #[test]
    fn test_basket_enums() {
        let mut req = basket("Weekly");
        req.order_type = "SL".into();
        assert!(matches!(req.check(), Err(Rejection::InvalidRequest(_))));
    }
}
