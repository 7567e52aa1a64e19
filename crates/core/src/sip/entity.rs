use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::ClientQuery;
use crate::common::guard::{Guarded, Rejection, one_of, positive, positive_int, required};
use crate::common::paging::parse_date;

pub const SIP_FREQUENCIES: &[&str] = &["DAILY", "WEEKLY", "MONTHLY"];

/// # Summary
/// 新建定投计划。
///
/// # Invariants
/// - `amount` 与 `quantity` 恰好给出其一且为正。
/// - `installments > 0`，`start_date` 为 `YYYY-MM-DD`。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSipRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 10))]
    pub exchange: String,
    #[validate(length(min = 1, max = 20))]
    pub token: String,
    #[validate(length(min = 1, max = 50))]
    pub trading_symbol: String,
    pub amount: Option<f64>,
    pub quantity: Option<i64>,
    #[schema(example = "MONTHLY")]
    pub frequency: String,
    #[schema(example = "2026-11-01")]
    pub start_date: String,
    #[schema(example = 12)]
    pub installments: u32,
}

impl Guarded for CreateSipRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        match (self.amount, self.quantity) {
            (Some(amount), None) => positive("amount", amount)?,
            (None, Some(quantity)) => positive_int("quantity", quantity)?,
            _ => {
                return Err(Rejection::InvalidRequest(
                    "exactly one of amount or quantity is required".to_string(),
                ));
            }
        }
        one_of("frequency", &self.frequency, SIP_FREQUENCIES)?;
        if self.installments == 0 {
            return Err(Rejection::InvalidRequest("installments must be positive".to_string()));
        }
        if parse_date(&self.start_date).is_none() {
            return Err(Rejection::InvalidRequest(format!(
                "startDate is malformed: {:?}",
                self.start_date
            )));
        }
        Ok(())
    }
}

/// 修改定投计划，未给出的字段保持不变
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModifySipRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub sip_id: String,
    pub amount: Option<f64>,
    pub quantity: Option<i64>,
    pub frequency: Option<String>,
}

impl Guarded for ModifySipRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        if self.amount.is_none() && self.quantity.is_none() && self.frequency.is_none() {
            return Err(Rejection::InvalidRequest("nothing to modify".to_string()));
        }
        if let Some(amount) = self.amount {
            positive("amount", amount)?;
        }
        if let Some(quantity) = self.quantity {
            positive_int("quantity", quantity)?;
        }
        if let Some(frequency) = &self.frequency {
            one_of("frequency", frequency, SIP_FREQUENCIES)?;
        }
        Ok(())
    }
}

/// 删除定投计划: `sipId` 来自路径，`clientId` 来自查询串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSipRequest {
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub sip_id: String,
}

impl DeleteSipRequest {
    pub fn new(sip_id: String, query: ClientQuery) -> Self {
        Self {
            client_id: query.client_id.unwrap_or_default(),
            sip_id,
        }
    }
}

impl Guarded for DeleteSipRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        required("clientId", &self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sip() -> CreateSipRequest {
        CreateSipRequest {
            client_id: "AB1234".into(),
            exchange: "NSE".into(),
            token: "1594".into(),
            trading_symbol: "INFY-EQ".into(),
            amount: Some(5000.0),
            quantity: None,
            frequency: "MONTHLY".into(),
            start_date: "2026-11-01".into(),
            installments: 12,
        }
    }

    #[test]
    fn test_sip_amount_xor_quantity() {
        assert!(sip().check().is_ok());

        let mut both = sip();
        both.quantity = Some(2);
        assert!(both.check().is_err());

        let mut neither = sip();
        neither.amount = None;
        assert!(neither.check().is_err());

        let mut by_quantity = sip();
        by_quantity.amount = None;
        by_quantity.quantity = Some(2);
        assert!(by_quantity.check().is_ok());
    }

    #[test]
    fn test_sip_schedule_fields() {
        let mut req = sip();
        req.frequency = "YEARLY".into();
        assert!(req.check().is_err());

        let mut req = sip();
        req.installments = 0;
        assert!(req.check().is_err());

        let mut req = sip();
        req.start_date = "01-11-2026".into();
        assert!(req.check().is_err());
    }

    #[test]
    fn test_modify_requires_a_change() {
        let req = ModifySipRequest {
            client_id: "AB1234".into(),
            sip_id: "SIP-9".into(),
            amount: None,
            quantity: None,
            frequency: None,
        };
        assert!(req.check().is_err());
    }

    #[test]
    fn test_delete_bounds_path_id() {
        let query = |client: Option<&str>| ClientQuery {
            client_id: client.map(str::to_string),
        };

        let req = DeleteSipRequest::new("SIP-42".into(), query(Some("AB1234")));
        assert!(req.validate().is_ok());
        assert!(req.check().is_ok());

        let req = DeleteSipRequest::new("S".repeat(41), query(Some("AB1234")));
        assert!(req.validate().is_err());

        let req = DeleteSipRequest::new("SIP-42".into(), query(None));
        assert!(req.check().is_err());
    }
}
