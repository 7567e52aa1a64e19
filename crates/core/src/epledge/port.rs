use async_trait::async_trait;

use super::entity::{PledgeRequest, PledgeTransactionsRequest};
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// 电子质押 (e-Pledge) 接口。
///
/// # Invariants
/// - 全部操作均要求 Token 属于请求中的客户。
#[async_trait]
pub trait PledgeProvider: Send + Sync {
    async fn pledge(&self, req: PledgeRequest, header: RequestHeader) -> Reply;

    async fn unpledge(&self, req: PledgeRequest, header: RequestHeader) -> Reply;

    async fn pledge_transactions(
        &self,
        req: PledgeTransactionsRequest,
        header: RequestHeader,
    ) -> Reply;

    async fn pledged_holdings(&self, req: ClientRequest, header: RequestHeader) -> Reply;
}
