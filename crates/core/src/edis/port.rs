use async_trait::async_trait;

use super::entity::{EdisRequest, EdisStatusRequest};
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// 电子交割指令 (eDIS) 接口: TPIN 申请、卖出授权与状态查询。
#[async_trait]
pub trait EdisProvider: Send + Sync {
    async fn generate_tpin(&self, req: ClientRequest, header: RequestHeader) -> Reply;

    async fn edis_request(&self, req: EdisRequest, header: RequestHeader) -> Reply;

    async fn edis_status(&self, req: EdisStatusRequest, header: RequestHeader) -> Reply;
}
