use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::ClientPageQuery;
use crate::common::guard::{Guarded, Rejection, count_within};
use crate::common::mask::mask;
use crate::common::paging::Pagination;

pub const MAX_MARK_READ_IDS: usize = 100;

/// 已补全分页的通知列表请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsRequest {
    pub client_id: String,
    pub pagination: Pagination,
}

impl From<ClientPageQuery> for NotificationsRequest {
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
pub struct MarkReadRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    pub notification_ids: Vec<String>,
}

impl Guarded for MarkReadRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        count_within("notificationIds", self.notification_ids.len(), 1, MAX_MARK_READ_IDS)
    }
}

/// # Summary
/// 注册推送设备。
///
/// # Invariants
/// - 推送 Token 只以末 6 位出现在日志中。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 4096))]
    pub push_token: String,
}

impl Guarded for RegisterDeviceRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn summary(&self) -> Option<String> {
        Some(format!("pushToken={}", mask(&self.push_token, 6)))
    }
}
