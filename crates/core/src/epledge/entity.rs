use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, count_within, isin, positive, positive_int, required};
use crate::common::paging::{DateRange, today};

pub const MAX_PLEDGE_SECURITIES: usize = 50;

/// 质押/解押的单只证券
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PledgeSecurity {
    #[schema(example = "INE002A01018")]
    pub isin: String,
    #[schema(example = 10)]
    pub quantity: i64,
    #[schema(example = 2450.0)]
    pub price: f64,
}

/// # Summary
/// 质押与解押共用的请求体。
///
/// # Invariants
/// - 每只证券数量与价格均为正数。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PledgeRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    pub securities: Vec<PledgeSecurity>,
}

impl Guarded for PledgeRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        count_within("securities", self.securities.len(), 1, MAX_PLEDGE_SECURITIES)?;
        self.securities.iter().try_for_each(|s| {
            isin("isin", &s.isin)?;
            positive_int("quantity", s.quantity)?;
            positive("price", s.price)
        })
    }
}

/// 质押流水查询串 (`?clientId=&fromDate=&toDate=`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PledgeTransactionsQuery {
    pub client_id: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl PledgeTransactionsQuery {
    /// 以给定的 "今天" 补全日期范围
    pub fn resolve(self, today: NaiveDate) -> PledgeTransactionsRequest {
        let range = DateRange::parse(self.from_date.as_deref(), self.to_date.as_deref(), today);
        PledgeTransactionsRequest {
            client_id: self.client_id.unwrap_or_default(),
            range,
        }
    }
}

impl Guarded for PledgeTransactionsQuery {
    fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    fn check(&self) -> Result<(), Rejection> {
        required("clientId", self.client_id.as_deref().unwrap_or_default())?;
        DateRange::parse(self.from_date.as_deref(), self.to_date.as_deref(), today())
            .ensure_ordered()
    }
}

/// 已补全日期范围的质押流水请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PledgeTransactionsRequest {
    pub client_id: String,
    pub range: DateRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pledge_positive_checks() {
        let mut req = PledgeRequest {
            client_id: "AB1234".into(),
            securities: vec![PledgeSecurity {
                isin: "INE002A01018".into(),
                quantity: 10,
                price: 2450.0,
            }],
        };
        assert!(req.check().is_ok());

        req.securities[0].price = -1.0;
        assert!(req.check().is_err());

        req.securities[0].price = 1.0;
        req.securities[0].quantity = -3;
        assert!(req.check().is_err());
    }

    #[test]
    fn test_transactions_query_resolution() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 31).unwrap();
        let query = PledgeTransactionsQuery {
            client_id: Some("AB1234".into()),
            from_date: Some("not-a-date".into()),
            to_date: None,
        };
        assert!(query.check().is_ok());

        let req = query.resolve(today);
        assert_eq!(req.client_id, "AB1234");
        assert_eq!(req.range.to, today);
        assert_eq!(req.range.from, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
    }

    #[test]
    fn test_transactions_query_rejects_inverted_range() {
        let query = PledgeTransactionsQuery {
            client_id: Some("AB1234".into()),
            from_date: Some("2026-02-01".into()),
            to_date: Some("2026-01-01".into()),
        };
        assert!(query.check().is_err());
    }
}
