//! 测试替身: 记录调用并返回预设响应的后端与固定 Token 表的鉴权器。
//!
//! 仅在 `test-utils` feature 下编译，供各上层 crate 的集成测试使用。

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::auth::port::{AuthOutcome, ClientAuthenticator};
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::paging::Pagination;
use crate::common::response::{ApiRes, Reply};

use crate::alerts::entity::{AlertIdRequest, EditAlertRequest, SetAlertRequest};
use crate::alerts::port::AlertsProvider;
use crate::basket::entity::{BasketIdRequest, BasketInstrumentRequest, CreateBasketRequest, DeleteInstrumentRequest, FetchBasketsRequest, RenameBasketRequest};
use crate::basket::port::BasketProvider;
use crate::charges::entity::{BrokerageChargesRequest, CombinedChargesRequest};
use crate::charges::port::ChargesProvider;
use crate::cmots::entity::{CompanyRequest, FinancialsRequest};
use crate::cmots::port::CmotsProvider;
use crate::collections::entity::{CollectionDetailsRequest};
use crate::collections::port::CollectionsProvider;
use crate::edis::entity::{EdisRequest, EdisStatusRequest};
use crate::edis::port::EdisProvider;
use crate::epledge::entity::{PledgeRequest, PledgeTransactionsRequest};
use crate::epledge::port::PledgeProvider;
use crate::finvu::entity::{ConsentRequest, ConsentStatusRequest, FetchStatementRequest};
use crate::finvu::port::FinvuProvider;
use crate::freshdesk::entity::{CreateTicketRequest, ReplyTicketRequest, TicketsRequest};
use crate::freshdesk::port::FreshdeskProvider;
use crate::ipo::entity::{IpoCancelRequest, IpoOrderRequest, IpoStageRequest};
use crate::ipo::port::IpoProvider;
use crate::login::entity::{ForgotPasswordRequest, LoginRequest, OAuthAuthorizeRequest, OAuthTokenRequest, SetPasswordRequest, TotpRequest};
use crate::login::port::LoginProvider;
use crate::notifications::entity::{MarkReadRequest, NotificationsRequest, RegisterDeviceRequest};
use crate::notifications::port::NotificationProvider;
use crate::option_chain::entity::{ExpiryRequest, OptionChainRequest};
use crate::option_chain::port::OptionChainProvider;
use crate::pins::entity::{PinRequest, UnpinRequest};
use crate::pins::port::PinsProvider;
use crate::pockets::entity::{BuyPocketRequest, ExitPocketRequest, PocketIdRequest};
use crate::pockets::port::PocketsProvider;
use crate::screeners::entity::{RunScreenerRequest};
use crate::screeners::port::ScreenerProvider;
use crate::session::entity::{TerminateSessionsRequest};
use crate::session::port::SessionInfoProvider;
use crate::sip::entity::{CreateSipRequest, DeleteSipRequest, ModifySipRequest};
use crate::sip::port::SipProvider;
use crate::technical::entity::{IndicatorRequest};
use crate::technical::port::TechnicalIndicatorProvider;
use crate::upi::entity::{UpiPreferenceRequest};
use crate::upi::port::UpiPreferenceProvider;
use crate::user::entity::{UpdateEmailRequest};
use crate::user::port::UserDetailsProvider;
use crate::warnings::entity::{AcknowledgeWarningRequest, ScripWarningRequest};
use crate::warnings::port::WarningsProvider;
use crate::watchlist::entity::{CreateWatchlistRequest, RenameWatchlistRequest, WatchlistIdRequest, WatchlistScripsRequest};
use crate::watchlist::port::WatchlistProvider;

/// 一次被记录的 Provider 调用
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub function: &'static str,
    pub request: Value,
    pub header: RequestHeader,
}

/// # Summary
/// 实现全部 Provider 的内存后端。
///
/// # Logic
/// 每次调用都把 (方法名, 序列化后的请求, 请求头) 追加到调用记录，并返回当前预设的 `Reply`。
pub struct MockBackend {
    reply: Mutex<Reply>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::replying((200, ApiRes::success()))
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(reply: Reply) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn set_reply(&self, reply: Reply) {
        *self.reply.lock().await = reply;
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().await.last().cloned()
    }

    async fn record<T: Serialize + Sync>(
        &self,
        function: &'static str,
        req: &T,
        header: RequestHeader,
    ) -> Reply {
        let request = serde_json::to_value(req).unwrap_or(Value::Null);
        self.calls.lock().await.push(RecordedCall {
            function,
            request,
            header,
        });
        self.reply.lock().await.clone()
    }
}

#[async_trait]
impl AlertsProvider for MockBackend {
    async fn set_alert(&self, req: SetAlertRequest, header: RequestHeader) -> Reply {
        self.record("set_alert", &req, header).await
    }

    async fn edit_alert(&self, req: EditAlertRequest, header: RequestHeader) -> Reply {
        self.record("edit_alert", &req, header).await
    }

    async fn delete_alert(&self, req: AlertIdRequest, header: RequestHeader) -> Reply {
        self.record("delete_alert", &req, header).await
    }

    async fn get_alerts(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("get_alerts", &req, header).await
    }
}

#[async_trait]
impl BasketProvider for MockBackend {
    async fn create_basket(&self, req: CreateBasketRequest, header: RequestHeader) -> Reply {
        self.record("create_basket", &req, header).await
    }

    async fn rename_basket(&self, req: RenameBasketRequest, header: RequestHeader) -> Reply {
        self.record("rename_basket", &req, header).await
    }

    async fn delete_basket(&self, req: BasketIdRequest, header: RequestHeader) -> Reply {
        self.record("delete_basket", &req, header).await
    }

    async fn fetch_baskets(&self, req: FetchBasketsRequest, header: RequestHeader) -> Reply {
        self.record("fetch_baskets", &req, header).await
    }

    async fn add_instrument(&self, req: BasketInstrumentRequest, header: RequestHeader) -> Reply {
        self.record("add_instrument", &req, header).await
    }

    async fn delete_instrument(
        &self,
        req: DeleteInstrumentRequest,
        header: RequestHeader,
    ) -> Reply {
        self.record("delete_instrument", &req, header).await
    }

    async fn execute_basket(&self, req: BasketIdRequest, header: RequestHeader) -> Reply {
        self.record("execute_basket", &req, header).await
    }
}

#[async_trait]
impl ChargesProvider for MockBackend {
    async fn brokerage_charges(
        &self,
        req: BrokerageChargesRequest,
        header: RequestHeader,
    ) -> Reply {
        self.record("brokerage_charges", &req, header).await
    }

    async fn combined_charges(&self, req: CombinedChargesRequest, header: RequestHeader) -> Reply {
        self.record("combined_charges", &req, header).await
    }
}

#[async_trait]
impl CmotsProvider for MockBackend {
    async fn company_profile(&self, req: CompanyRequest, header: RequestHeader) -> Reply {
        self.record("company_profile", &req, header).await
    }

    async fn shareholding(&self, req: CompanyRequest, header: RequestHeader) -> Reply {
        self.record("shareholding", &req, header).await
    }

    async fn financials(&self, req: FinancialsRequest, header: RequestHeader) -> Reply {
        self.record("financials", &req, header).await
    }

    async fn news(&self, req: Pagination, header: RequestHeader) -> Reply {
        self.record("news", &req, header).await
    }
}

#[async_trait]
impl CollectionsProvider for MockBackend {
    async fn get_collections(&self, req: Pagination, header: RequestHeader) -> Reply {
        self.record("get_collections", &req, header).await
    }

    async fn collection_details(
        &self,
        req: CollectionDetailsRequest,
        header: RequestHeader,
    ) -> Reply {
        self.record("collection_details", &req, header).await
    }
}

#[async_trait]
impl EdisProvider for MockBackend {
    async fn generate_tpin(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("generate_tpin", &req, header).await
    }

    async fn edis_request(&self, req: EdisRequest, header: RequestHeader) -> Reply {
        self.record("edis_request", &req, header).await
    }

    async fn edis_status(&self, req: EdisStatusRequest, header: RequestHeader) -> Reply {
        self.record("edis_status", &req, header).await
    }
}

#[async_trait]
impl PledgeProvider for MockBackend {
    async fn pledge(&self, req: PledgeRequest, header: RequestHeader) -> Reply {
        self.record("pledge", &req, header).await
    }

    async fn unpledge(&self, req: PledgeRequest, header: RequestHeader) -> Reply {
        self.record("unpledge", &req, header).await
    }

    async fn pledge_transactions(
        &self,
        req: PledgeTransactionsRequest,
        header: RequestHeader,
    ) -> Reply {
        self.record("pledge_transactions", &req, header).await
    }

    async fn pledged_holdings(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("pledged_holdings", &req, header).await
    }
}

#[async_trait]
impl FinvuProvider for MockBackend {
    async fn create_consent(&self, req: ConsentRequest, header: RequestHeader) -> Reply {
        self.record("create_consent", &req, header).await
    }

    async fn consent_status(&self, req: ConsentStatusRequest, header: RequestHeader) -> Reply {
        self.record("consent_status", &req, header).await
    }

    async fn fetch_statement(&self, req: FetchStatementRequest, header: RequestHeader) -> Reply {
        self.record("fetch_statement", &req, header).await
    }
}

#[async_trait]
impl FreshdeskProvider for MockBackend {
    async fn create_ticket(&self, req: CreateTicketRequest, header: RequestHeader) -> Reply {
        self.record("create_ticket", &req, header).await
    }

    async fn tickets(&self, req: TicketsRequest, header: RequestHeader) -> Reply {
        self.record("tickets", &req, header).await
    }

    async fn reply_ticket(&self, req: ReplyTicketRequest, header: RequestHeader) -> Reply {
        self.record("reply_ticket", &req, header).await
    }
}

#[async_trait]
impl IpoProvider for MockBackend {
    async fn fetch_ipos(&self, req: IpoStageRequest, header: RequestHeader) -> Reply {
        self.record("fetch_ipos", &req, header).await
    }

    async fn place_order(&self, req: IpoOrderRequest, header: RequestHeader) -> Reply {
        self.record("place_order", &req, header).await
    }

    async fn cancel_order(&self, req: IpoCancelRequest, header: RequestHeader) -> Reply {
        self.record("cancel_order", &req, header).await
    }

    async fn order_book(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("order_book", &req, header).await
    }
}

#[async_trait]
impl LoginProvider for MockBackend {
    async fn login(&self, req: LoginRequest, header: RequestHeader) -> Reply {
        self.record("login", &req, header).await
    }

    async fn validate_totp(&self, req: TotpRequest, header: RequestHeader) -> Reply {
        self.record("validate_totp", &req, header).await
    }

    async fn forgot_password(&self, req: ForgotPasswordRequest, header: RequestHeader) -> Reply {
        self.record("forgot_password", &req, header).await
    }

    async fn set_password(&self, req: SetPasswordRequest, header: RequestHeader) -> Reply {
        self.record("set_password", &req, header).await
    }

    async fn logout(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("logout", &req, header).await
    }

    async fn authorize(&self, req: OAuthAuthorizeRequest, header: RequestHeader) -> Reply {
        self.record("authorize", &req, header).await
    }

    async fn token(&self, req: OAuthTokenRequest, header: RequestHeader) -> Reply {
        self.record("token", &req, header).await
    }
}

#[async_trait]
impl NotificationProvider for MockBackend {
    async fn notifications(&self, req: NotificationsRequest, header: RequestHeader) -> Reply {
        self.record("notifications", &req, header).await
    }

    async fn mark_read(&self, req: MarkReadRequest, header: RequestHeader) -> Reply {
        self.record("mark_read", &req, header).await
    }

    async fn register_device(&self, req: RegisterDeviceRequest, header: RequestHeader) -> Reply {
        self.record("register_device", &req, header).await
    }
}

#[async_trait]
impl OptionChainProvider for MockBackend {
    async fn option_chain(&self, req: OptionChainRequest, header: RequestHeader) -> Reply {
        self.record("option_chain", &req, header).await
    }

    async fn expiries(&self, req: ExpiryRequest, header: RequestHeader) -> Reply {
        self.record("expiries", &req, header).await
    }
}

#[async_trait]
impl PinsProvider for MockBackend {
    async fn pin(&self, req: PinRequest, header: RequestHeader) -> Reply {
        self.record("pin", &req, header).await
    }

    async fn unpin(&self, req: UnpinRequest, header: RequestHeader) -> Reply {
        self.record("unpin", &req, header).await
    }

    async fn fetch_pins(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("fetch_pins", &req, header).await
    }
}

#[async_trait]
impl PocketsProvider for MockBackend {
    async fn fetch_pockets(&self, req: Pagination, header: RequestHeader) -> Reply {
        self.record("fetch_pockets", &req, header).await
    }

    async fn pocket_details(&self, req: PocketIdRequest, header: RequestHeader) -> Reply {
        self.record("pocket_details", &req, header).await
    }

    async fn buy_pocket(&self, req: BuyPocketRequest, header: RequestHeader) -> Reply {
        self.record("buy_pocket", &req, header).await
    }

    async fn exit_pocket(&self, req: ExitPocketRequest, header: RequestHeader) -> Reply {
        self.record("exit_pocket", &req, header).await
    }
}

#[async_trait]
impl ScreenerProvider for MockBackend {
    async fn list_screeners(&self, req: Pagination, header: RequestHeader) -> Reply {
        self.record("list_screeners", &req, header).await
    }

    async fn run_screener(&self, req: RunScreenerRequest, header: RequestHeader) -> Reply {
        self.record("run_screener", &req, header).await
    }
}

#[async_trait]
impl SessionInfoProvider for MockBackend {
    async fn session_info(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("session_info", &req, header).await
    }

    async fn terminate_sessions(
        &self,
        req: TerminateSessionsRequest,
        header: RequestHeader,
    ) -> Reply {
        self.record("terminate_sessions", &req, header).await
    }
}

#[async_trait]
impl SipProvider for MockBackend {
    async fn create_sip(&self, req: CreateSipRequest, header: RequestHeader) -> Reply {
        self.record("create_sip", &req, header).await
    }

    async fn modify_sip(&self, req: ModifySipRequest, header: RequestHeader) -> Reply {
        self.record("modify_sip", &req, header).await
    }

    async fn delete_sip(&self, req: DeleteSipRequest, header: RequestHeader) -> Reply {
        self.record("delete_sip", &req, header).await
    }

    async fn fetch_sips(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("fetch_sips", &req, header).await
    }
}

#[async_trait]
impl TechnicalIndicatorProvider for MockBackend {
    async fn indicators(&self, req: IndicatorRequest, header: RequestHeader) -> Reply {
        self.record("indicators", &req, header).await
    }
}

#[async_trait]
impl UpiPreferenceProvider for MockBackend {
    async fn set_preference(&self, req: UpiPreferenceRequest, header: RequestHeader) -> Reply {
        self.record("set_preference", &req, header).await
    }

    async fn get_preference(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("get_preference", &req, header).await
    }
}

#[async_trait]
impl UserDetailsProvider for MockBackend {
    async fn user_details(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("user_details", &req, header).await
    }

    async fn bank_details(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("bank_details", &req, header).await
    }

    async fn update_email(&self, req: UpdateEmailRequest, header: RequestHeader) -> Reply {
        self.record("update_email", &req, header).await
    }
}

#[async_trait]
impl WarningsProvider for MockBackend {
    async fn scrip_warnings(&self, req: ScripWarningRequest, header: RequestHeader) -> Reply {
        self.record("scrip_warnings", &req, header).await
    }

    async fn acknowledge(&self, req: AcknowledgeWarningRequest, header: RequestHeader) -> Reply {
        self.record("acknowledge", &req, header).await
    }
}

#[async_trait]
impl WatchlistProvider for MockBackend {
    async fn create(&self, req: CreateWatchlistRequest, header: RequestHeader) -> Reply {
        self.record("create", &req, header).await
    }

    async fn rename(&self, req: RenameWatchlistRequest, header: RequestHeader) -> Reply {
        self.record("rename", &req, header).await
    }

    async fn delete(&self, req: WatchlistIdRequest, header: RequestHeader) -> Reply {
        self.record("delete", &req, header).await
    }

    async fn add_scrips(&self, req: WatchlistScripsRequest, header: RequestHeader) -> Reply {
        self.record("add_scrips", &req, header).await
    }

    async fn delete_scrips(&self, req: WatchlistScripsRequest, header: RequestHeader) -> Reply {
        self.record("delete_scrips", &req, header).await
    }

    async fn fetch(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.record("fetch", &req, header).await
    }
}

/// # Summary
/// 基于固定 `token -> clientId` 表的鉴权器。
///
/// # Logic
/// 未登记的 Token 视为无效；客户号比对忽略大小写。
#[derive(Debug, Clone, Default)]
pub struct StaticAuthenticator {
    tokens: HashMap<String, String>,
}

impl StaticAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: &str, client_id: &str) -> Self {
        self.tokens.insert(token.to_string(), client_id.to_string());
        self
    }
}

#[async_trait]
impl ClientAuthenticator for StaticAuthenticator {
    async fn check_auth_with_client(&self, client_id: &str, token: &str) -> AuthOutcome {
        match self.tokens.get(token) {
            Some(owner) => AuthOutcome::valid(owner.eq_ignore_ascii_case(client_id)),
            None => AuthOutcome::INVALID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend_records_calls() {
        let backend = MockBackend::new();
        let req = ClientRequest {
            client_id: "AB1234".into(),
        };
        let (code, res) = backend.fetch_sips(req, RequestHeader::default()).await;
        assert_eq!(code, 200);
        assert!(res.status);

        let call = backend.last_call().await.unwrap();
        assert_eq!(call.function, "fetch_sips");
        assert_eq!(call.request, serde_json::json!({"clientId": "AB1234"}));
    }

    #[tokio::test]
    async fn test_static_authenticator() {
        let auth = StaticAuthenticator::new().with_token("t-1", "AB1234");
        assert_eq!(auth.check_auth_with_client("ab1234", "t-1").await, AuthOutcome::valid(true));
        assert_eq!(auth.check_auth_with_client("ZZ9999", "t-1").await, AuthOutcome::valid(false));
        assert_eq!(auth.check_auth_with_client("AB1234", "other").await, AuthOutcome::INVALID);
    }
}
