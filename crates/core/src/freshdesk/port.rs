use async_trait::async_trait;

use super::entity::{CreateTicketRequest, ReplyTicketRequest, TicketsRequest};
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// 客服工单 (Freshdesk) 接口
#[async_trait]
pub trait FreshdeskProvider: Send + Sync {
    async fn create_ticket(&self, req: CreateTicketRequest, header: RequestHeader) -> Reply;

    async fn tickets(&self, req: TicketsRequest, header: RequestHeader) -> Reply;

    async fn reply_ticket(&self, req: ReplyTicketRequest, header: RequestHeader) -> Reply;
}
