use async_trait::async_trait;

use super::entity::RunScreenerRequest;
use crate::common::header::RequestHeader;
use crate::common::paging::Pagination;
use crate::common::response::Reply;

/// 选股器接口
#[async_trait]
pub trait ScreenerProvider: Send + Sync {
    async fn list_screeners(&self, req: Pagination, header: RequestHeader) -> Reply;

    async fn run_screener(&self, req: RunScreenerRequest, header: RequestHeader) -> Reply;
}
