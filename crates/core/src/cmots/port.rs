use async_trait::async_trait;

use super::entity::{CompanyRequest, FinancialsRequest};
use crate::common::header::RequestHeader;
use crate::common::paging::Pagination;
use crate::common::response::Reply;

/// # Summary
/// 第三方上市公司资料 (CMOTS) 查询接口。
///
/// # Invariants
/// - 全部为公开资料，不做客户鉴权。
#[async_trait]
pub trait CmotsProvider: Send + Sync {
    async fn company_profile(&self, req: CompanyRequest, header: RequestHeader) -> Reply;

    async fn shareholding(&self, req: CompanyRequest, header: RequestHeader) -> Reply;

    async fn financials(&self, req: FinancialsRequest, header: RequestHeader) -> Reply;

    async fn news(&self, req: Pagination, header: RequestHeader) -> Reply;
}
