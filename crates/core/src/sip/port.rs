use async_trait::async_trait;

use super::entity::{CreateSipRequest, DeleteSipRequest, ModifySipRequest};
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// 股票定投 (SIP) 接口。
#[async_trait]
pub trait SipProvider: Send + Sync {
    async fn create_sip(&self, req: CreateSipRequest, header: RequestHeader) -> Reply;

    async fn modify_sip(&self, req: ModifySipRequest, header: RequestHeader) -> Reply;

    async fn delete_sip(&self, req: DeleteSipRequest, header: RequestHeader) -> Reply;

    async fn fetch_sips(&self, req: ClientRequest, header: RequestHeader) -> Reply;
}
