use async_trait::async_trait;

use super::entity::{ConsentRequest, ConsentStatusRequest, FetchStatementRequest};
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// 账户聚合 (Finvu) 授权与对账单拉取接口
#[async_trait]
pub trait FinvuProvider: Send + Sync {
    async fn create_consent(&self, req: ConsentRequest, header: RequestHeader) -> Reply;

    async fn consent_status(&self, req: ConsentStatusRequest, header: RequestHeader) -> Reply;

    async fn fetch_statement(&self, req: FetchStatementRequest, header: RequestHeader) -> Reply;
}
