use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::ClientPageQuery;
use crate::common::guard::Guarded;
use crate::common::paging::Pagination;

/// # Summary
/// 客服工单创建请求体。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[schema(example = "trader@example.com")]
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 255))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    pub category: Option<String>,
}

impl Guarded for CreateTicketRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

/// 已补全分页的工单列表请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketsRequest {
    pub client_id: String,
    pub pagination: Pagination,
}

impl From<ClientPageQuery> for TicketsRequest {
    fn from(query: ClientPageQuery) -> Self {
        let pagination = query.pagination();
        Self {
            client_id: query.client_id.unwrap_or_default(),
            pagination,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyTicketRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 32))]
    pub ticket_id: String,
    #[validate(length(min = 1, max = 5000))]
    pub body: String,
}

impl Guarded for ReplyTicketRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_email_is_validated() {
        let mut req = CreateTicketRequest {
            client_id: "AB1234".into(),
            email: "trader@example.com".into(),
            subject: "Funds not credited".into(),
            description: "Payout pending since Monday".into(),
            category: None,
        };
        assert!(req.validate().is_ok());

        req.email = "not-an-email".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_tickets_request_from_query() {
        let req = TicketsRequest::from(ClientPageQuery {
            client_id: Some("AB1234".into()),
            page: Some("4".into()),
            size: Some("x".into()),
        });
        assert_eq!(req.pagination, Pagination { page: 4, size: 10 });
    }
}
