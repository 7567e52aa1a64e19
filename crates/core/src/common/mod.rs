pub mod guard;
pub mod header;
pub mod mask;
pub mod paging;
pub mod response;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use self::guard::{Guarded, Rejection, required};
use self::paging::Pagination;

/// # Summary
/// 只携带客户号的请求体，被大量 "按客户查询" 类接口复用。
///
/// # Invariants
/// - `client_id` 同时作为客户鉴权的比对对象。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    #[schema(example = "AB1234")]
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
}

impl Guarded for ClientRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

/// 分页查询串，字段保持原始文本以便宽松解析
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::parse(self.page.as_deref(), self.size.as_deref())
    }
}

impl Guarded for PageQuery {}

/// 带客户号的分页查询串
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPageQuery {
    pub client_id: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl ClientPageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::parse(self.page.as_deref(), self.size.as_deref())
    }
}

impl Guarded for ClientPageQuery {
    fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    fn check(&self) -> Result<(), Rejection> {
        required("clientId", self.client_id.as_deref().unwrap_or_default())
    }
}

/// 只携带客户号的查询串 (DELETE 等无请求体的接口)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientQuery {
    pub client_id: Option<String>,
}

impl Guarded for ClientQuery {
    fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    fn check(&self) -> Result<(), Rejection> {
        required("clientId", self.client_id.as_deref().unwrap_or_default())
    }
}

/// 买卖方向取值
pub const TRANSACTION_TYPES: &[&str] = &["BUY", "SELL"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_page_query_requires_client() {
        let query = ClientPageQuery::default();
        assert!(query.check().is_err());
        assert_eq!(query.client_id(), None);

        let query = ClientPageQuery {
            client_id: Some("AB1234".into()),
            page: Some("two".into()),
            size: None,
        };
        assert!(query.check().is_ok());
        assert_eq!(query.pagination(), Pagination { page: 1, size: 10 });
    }

    #[test]
    fn test_client_request_validation() {
        let req = ClientRequest { client_id: String::new() };
        assert!(req.validate().is_err());

        let req = ClientRequest { client_id: "AB1234".into() };
        assert!(req.validate().is_ok());
        assert_eq!(Guarded::client_id(&req), Some("AB1234"));
    }
}
