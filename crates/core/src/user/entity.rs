use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::Guarded;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[schema(example = "trader@example.com")]
    #[validate(email)]
    pub email: String,
}

impl Guarded for UpdateEmailRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}
