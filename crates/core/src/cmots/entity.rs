use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, one_of, required};

pub const STATEMENT_KINDS: &[&str] = &["STANDALONE", "CONSOLIDATED"];
pub const STATEMENT_PERIODS: &[&str] = &["QUARTERLY", "ANNUAL"];

/// 公司代码查询串 (`?coCode=`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyQuery {
    pub co_code: Option<String>,
}

impl Guarded for CompanyQuery {
    fn check(&self) -> Result<(), Rejection> {
        required("coCode", self.co_code.as_deref().unwrap_or_default())
    }
}

/// 以公司代码定位的资料请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequest {
    #[schema(example = "476")]
    pub co_code: String,
}

impl From<CompanyQuery> for CompanyRequest {
    fn from(query: CompanyQuery) -> Self {
        Self {
            co_code: query.co_code.unwrap_or_default().trim().to_string(),
        }
    }
}

/// # Summary
/// 财务报表请求体。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialsRequest {
    #[validate(length(min = 1, max = 20))]
    pub co_code: String,
    #[schema(example = "CONSOLIDATED")]
    pub statement: String,
    #[schema(example = "QUARTERLY")]
    pub period: String,
}

impl Guarded for FinancialsRequest {
    fn check(&self) -> Result<(), Rejection> {
        one_of("statement", &self.statement, STATEMENT_KINDS)?;
        one_of("period", &self.period, STATEMENT_PERIODS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_query_conversion() {
        let query = CompanyQuery {
            co_code: Some(" 476 ".into()),
        };
        assert!(query.check().is_ok());
        assert_eq!(CompanyRequest::from(query).co_code, "476");
        assert!(CompanyQuery::default().check().is_err());
    }
}
