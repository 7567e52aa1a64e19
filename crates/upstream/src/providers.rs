//! 各业务域 Provider 的 HTTP 转发实现。

use async_trait::async_trait;

use bourse_core::common::ClientRequest;
use bourse_core::common::header::RequestHeader;
use bourse_core::common::paging::Pagination;
use bourse_core::common::response::Reply;

use bourse_core::alerts::entity::{AlertIdRequest, EditAlertRequest, SetAlertRequest};
use bourse_core::alerts::port::AlertsProvider;
use bourse_core::basket::entity::{
    BasketIdRequest,
    BasketInstrumentRequest,
    CreateBasketRequest,
    DeleteInstrumentRequest,
    FetchBasketsRequest,
    RenameBasketRequest,
};
use bourse_core::basket::port::BasketProvider;
use bourse_core::charges::entity::{BrokerageChargesRequest, CombinedChargesRequest};
use bourse_core::charges::port::ChargesProvider;
use bourse_core::cmots::entity::{CompanyRequest, FinancialsRequest};
use bourse_core::cmots::port::CmotsProvider;
use bourse_core::collections::entity::CollectionDetailsRequest;
use bourse_core::collections::port::CollectionsProvider;
use bourse_core::edis::entity::{EdisRequest, EdisStatusRequest};
use bourse_core::edis::port::EdisProvider;
use bourse_core::epledge::entity::{PledgeRequest, PledgeTransactionsRequest};
use bourse_core::epledge::port::PledgeProvider;
use bourse_core::finvu::entity::{ConsentRequest, ConsentStatusRequest, FetchStatementRequest};
use bourse_core::finvu::port::FinvuProvider;
use bourse_core::freshdesk::entity::{CreateTicketRequest, ReplyTicketRequest, TicketsRequest};
use bourse_core::freshdesk::port::FreshdeskProvider;
use bourse_core::ipo::entity::{IpoCancelRequest, IpoOrderRequest, IpoStageRequest};
use bourse_core::ipo::port::IpoProvider;
use bourse_core::login::entity::{
    ForgotPasswordRequest,
    LoginRequest,
    OAuthAuthorizeRequest,
    OAuthTokenRequest,
    SetPasswordRequest,
    TotpRequest,
};
use bourse_core::login::port::LoginProvider;
use bourse_core::notifications::entity::{
    MarkReadRequest,
    NotificationsRequest,
    RegisterDeviceRequest,
};
use bourse_core::notifications::port::NotificationProvider;
use bourse_core::option_chain::entity::{ExpiryRequest, OptionChainRequest};
use bourse_core::option_chain::port::OptionChainProvider;
use bourse_core::pins::entity::{PinRequest, UnpinRequest};
use bourse_core::pins::port::PinsProvider;
use bourse_core::pockets::entity::{BuyPocketRequest, ExitPocketRequest, PocketIdRequest};
use bourse_core::pockets::port::PocketsProvider;
use bourse_core::screeners::entity::RunScreenerRequest;
use bourse_core::screeners::port::ScreenerProvider;
use bourse_core::session::entity::TerminateSessionsRequest;
use bourse_core::session::port::SessionInfoProvider;
use bourse_core::sip::entity::{CreateSipRequest, DeleteSipRequest, ModifySipRequest};
use bourse_core::sip::port::SipProvider;
use bourse_core::technical::entity::IndicatorRequest;
use bourse_core::technical::port::TechnicalIndicatorProvider;
use bourse_core::upi::entity::UpiPreferenceRequest;
use bourse_core::upi::port::UpiPreferenceProvider;
use bourse_core::user::entity::UpdateEmailRequest;
use bourse_core::user::port::UserDetailsProvider;
use bourse_core::warnings::entity::{AcknowledgeWarningRequest, ScripWarningRequest};
use bourse_core::warnings::port::WarningsProvider;
use bourse_core::watchlist::entity::{
    CreateWatchlistRequest,
    RenameWatchlistRequest,
    WatchlistIdRequest,
    WatchlistScripsRequest,
};
use bourse_core::watchlist::port::WatchlistProvider;

use crate::remote::RemoteBackend;

#[async_trait]
impl AlertsProvider for RemoteBackend {
    async fn set_alert(&self, req: SetAlertRequest, header: RequestHeader) -> Reply {
        self.forward("/alerts/setAlerts", &req, &header).await
    }

    async fn edit_alert(&self, req: EditAlertRequest, header: RequestHeader) -> Reply {
        self.forward("/alerts/editAlert", &req, &header).await
    }

    async fn delete_alert(&self, req: AlertIdRequest, header: RequestHeader) -> Reply {
        self.forward("/alerts/deleteAlert", &req, &header).await
    }

    async fn get_alerts(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/alerts/getAlerts", &req, &header).await
    }
}

#[async_trait]
impl BasketProvider for RemoteBackend {
    async fn create_basket(&self, req: CreateBasketRequest, header: RequestHeader) -> Reply {
        self.forward("/basket/createBasket", &req, &header).await
    }

    async fn rename_basket(&self, req: RenameBasketRequest, header: RequestHeader) -> Reply {
        self.forward("/basket/renameBasket", &req, &header).await
    }

    async fn delete_basket(&self, req: BasketIdRequest, header: RequestHeader) -> Reply {
        self.forward("/basket/deleteBasket", &req, &header).await
    }

    async fn fetch_baskets(&self, req: FetchBasketsRequest, header: RequestHeader) -> Reply {
        self.forward("/basket/fetchBaskets", &req, &header).await
    }

    async fn add_instrument(&self, req: BasketInstrumentRequest, header: RequestHeader) -> Reply {
        self.forward("/basket/addInstrument", &req, &header).await
    }

    async fn delete_instrument(
        &self,
        req: DeleteInstrumentRequest,
        header: RequestHeader,
    ) -> Reply {
        self.forward("/basket/deleteInstrument", &req, &header).await
    }

    async fn execute_basket(&self, req: BasketIdRequest, header: RequestHeader) -> Reply {
        self.forward("/basket/executeBasket", &req, &header).await
    }
}

#[async_trait]
impl ChargesProvider for RemoteBackend {
    async fn brokerage_charges(
        &self,
        req: BrokerageChargesRequest,
        header: RequestHeader,
    ) -> Reply {
        self.forward("/charges/brokerageCharges", &req, &header).await
    }

    async fn combined_charges(&self, req: CombinedChargesRequest, header: RequestHeader) -> Reply {
        self.forward("/charges/combinedCharges", &req, &header).await
    }
}

#[async_trait]
impl CmotsProvider for RemoteBackend {
    async fn company_profile(&self, req: CompanyRequest, header: RequestHeader) -> Reply {
        self.forward("/cmots/companyProfile", &req, &header).await
    }

    async fn shareholding(&self, req: CompanyRequest, header: RequestHeader) -> Reply {
        self.forward("/cmots/shareholding", &req, &header).await
    }

    async fn financials(&self, req: FinancialsRequest, header: RequestHeader) -> Reply {
        self.forward("/cmots/financials", &req, &header).await
    }

    async fn news(&self, req: Pagination, header: RequestHeader) -> Reply {
        self.forward("/cmots/news", &req, &header).await
    }
}

#[async_trait]
impl CollectionsProvider for RemoteBackend {
    async fn get_collections(&self, req: Pagination, header: RequestHeader) -> Reply {
        self.forward("/collections/getCollections", &req, &header).await
    }

    async fn collection_details(
        &self,
        req: CollectionDetailsRequest,
        header: RequestHeader,
    ) -> Reply {
        self.forward("/collections/getCollectionDetails", &req, &header).await
    }
}

#[async_trait]
impl EdisProvider for RemoteBackend {
    async fn generate_tpin(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/edis/generateTpin", &req, &header).await
    }

    async fn edis_request(&self, req: EdisRequest, header: RequestHeader) -> Reply {
        self.forward("/edis/edisRequest", &req, &header).await
    }

    async fn edis_status(&self, req: EdisStatusRequest, header: RequestHeader) -> Reply {
        self.forward("/edis/edisStatus", &req, &header).await
    }
}

#[async_trait]
impl PledgeProvider for RemoteBackend {
    async fn pledge(&self, req: PledgeRequest, header: RequestHeader) -> Reply {
        self.forward("/epledge/pledgeRequest", &req, &header).await
    }

    async fn unpledge(&self, req: PledgeRequest, header: RequestHeader) -> Reply {
        self.forward("/epledge/unpledgeRequest", &req, &header).await
    }

    async fn pledge_transactions(
        &self,
        req: PledgeTransactionsRequest,
        header: RequestHeader,
    ) -> Reply {
        self.forward("/epledge/getPledgeTransactions", &req, &header).await
    }

    async fn pledged_holdings(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/epledge/getPledgedHoldings", &req, &header).await
    }
}

#[async_trait]
impl FinvuProvider for RemoteBackend {
    async fn create_consent(&self, req: ConsentRequest, header: RequestHeader) -> Reply {
        self.forward("/finvu/createConsent", &req, &header).await
    }

    async fn consent_status(&self, req: ConsentStatusRequest, header: RequestHeader) -> Reply {
        self.forward("/finvu/consentStatus", &req, &header).await
    }

    async fn fetch_statement(&self, req: FetchStatementRequest, header: RequestHeader) -> Reply {
        self.forward("/finvu/fetchStatement", &req, &header).await
    }
}

#[async_trait]
impl FreshdeskProvider for RemoteBackend {
    async fn create_ticket(&self, req: CreateTicketRequest, header: RequestHeader) -> Reply {
        self.forward("/freshdesk/createTicket", &req, &header).await
    }

    async fn tickets(&self, req: TicketsRequest, header: RequestHeader) -> Reply {
        self.forward("/freshdesk/getTickets", &req, &header).await
    }

    async fn reply_ticket(&self, req: ReplyTicketRequest, header: RequestHeader) -> Reply {
        self.forward("/freshdesk/replyTicket", &req, &header).await
    }
}

#[async_trait]
impl IpoProvider for RemoteBackend {
    async fn fetch_ipos(&self, req: IpoStageRequest, header: RequestHeader) -> Reply {
        self.forward("/ipo/fetchIpo", &req, &header).await
    }

    async fn place_order(&self, req: IpoOrderRequest, header: RequestHeader) -> Reply {
        self.forward("/ipo/placeIpoOrder", &req, &header).await
    }

    async fn cancel_order(&self, req: IpoCancelRequest, header: RequestHeader) -> Reply {
        self.forward("/ipo/cancelIpoOrder", &req, &header).await
    }

    async fn order_book(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/ipo/ipoOrderBook", &req, &header).await
    }
}

#[async_trait]
impl LoginProvider for RemoteBackend {
    async fn login(&self, req: LoginRequest, header: RequestHeader) -> Reply {
        self.forward("/login/login", &req, &header).await
    }

    async fn validate_totp(&self, req: TotpRequest, header: RequestHeader) -> Reply {
        self.forward("/login/validateTotp", &req, &header).await
    }

    async fn forgot_password(&self, req: ForgotPasswordRequest, header: RequestHeader) -> Reply {
        self.forward("/login/forgotPassword", &req, &header).await
    }

    async fn set_password(&self, req: SetPasswordRequest, header: RequestHeader) -> Reply {
        self.forward("/login/setPassword", &req, &header).await
    }

    async fn logout(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/login/logout", &req, &header).await
    }

    async fn authorize(&self, req: OAuthAuthorizeRequest, header: RequestHeader) -> Reply {
        self.forward("/oauth/authorize", &req, &header).await
    }

    async fn token(&self, req: OAuthTokenRequest, header: RequestHeader) -> Reply {
        self.forward("/oauth/token", &req, &header).await
    }
}

#[async_trait]
impl NotificationProvider for RemoteBackend {
    async fn notifications(&self, req: NotificationsRequest, header: RequestHeader) -> Reply {
        self.forward("/notifications/getNotifications", &req, &header).await
    }

    async fn mark_read(&self, req: MarkReadRequest, header: RequestHeader) -> Reply {
        self.forward("/notifications/markRead", &req, &header).await
    }

    async fn register_device(&self, req: RegisterDeviceRequest, header: RequestHeader) -> Reply {
        self.forward("/notifications/registerDevice", &req, &header).await
    }
}

#[async_trait]
impl OptionChainProvider for RemoteBackend {
    async fn option_chain(&self, req: OptionChainRequest, header: RequestHeader) -> Reply {
        self.forward("/optionChain/getOptionChain", &req, &header).await
    }

    async fn expiries(&self, req: ExpiryRequest, header: RequestHeader) -> Reply {
        self.forward("/optionChain/getExpiries", &req, &header).await
    }
}

#[async_trait]
impl PinsProvider for RemoteBackend {
    async fn pin(&self, req: PinRequest, header: RequestHeader) -> Reply {
        self.forward("/pins/pinScrip", &req, &header).await
    }

    async fn unpin(&self, req: UnpinRequest, header: RequestHeader) -> Reply {
        self.forward("/pins/unpinScrip", &req, &header).await
    }

    async fn fetch_pins(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/pins/fetchPins", &req, &header).await
    }
}

#[async_trait]
impl PocketsProvider for RemoteBackend {
    async fn fetch_pockets(&self, req: Pagination, header: RequestHeader) -> Reply {
        self.forward("/pockets/fetchPockets", &req, &header).await
    }

    async fn pocket_details(&self, req: PocketIdRequest, header: RequestHeader) -> Reply {
        self.forward("/pockets/pocketDetails", &req, &header).await
    }

    async fn buy_pocket(&self, req: BuyPocketRequest, header: RequestHeader) -> Reply {
        self.forward("/pockets/buyPocket", &req, &header).await
    }

    async fn exit_pocket(&self, req: ExitPocketRequest, header: RequestHeader) -> Reply {
        self.forward("/pockets/exitPocket", &req, &header).await
    }
}

#[async_trait]
impl ScreenerProvider for RemoteBackend {
    async fn list_screeners(&self, req: Pagination, header: RequestHeader) -> Reply {
        self.forward("/screeners/fetchScreeners", &req, &header).await
    }

    async fn run_screener(&self, req: RunScreenerRequest, header: RequestHeader) -> Reply {
        self.forward("/screeners/runScreener", &req, &header).await
    }
}

#[async_trait]
impl SessionInfoProvider for RemoteBackend {
    async fn session_info(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/session/getSessionInfo", &req, &header).await
    }

    async fn terminate_sessions(
        &self,
        req: TerminateSessionsRequest,
        header: RequestHeader,
    ) -> Reply {
        self.forward("/session/terminateSessions", &req, &header).await
    }
}

#[async_trait]
impl SipProvider for RemoteBackend {
    async fn create_sip(&self, req: CreateSipRequest, header: RequestHeader) -> Reply {
        self.forward("/sip/createSip", &req, &header).await
    }

    async fn modify_sip(&self, req: ModifySipRequest, header: RequestHeader) -> Reply {
        self.forward("/sip/modifySip", &req, &header).await
    }

    async fn delete_sip(&self, req: DeleteSipRequest, header: RequestHeader) -> Reply {
        self.forward("/sip/deleteSip", &req, &header).await
    }

    async fn fetch_sips(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/sip/fetchSips", &req, &header).await
    }
}

#[async_trait]
impl TechnicalIndicatorProvider for RemoteBackend {
    async fn indicators(&self, req: IndicatorRequest, header: RequestHeader) -> Reply {
        self.forward("/technicalIndicators/getIndicators", &req, &header).await
    }
}

#[async_trait]
impl UpiPreferenceProvider for RemoteBackend {
    async fn set_preference(&self, req: UpiPreferenceRequest, header: RequestHeader) -> Reply {
        self.forward("/upi/setUpiPreference", &req, &header).await
    }

    async fn get_preference(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/upi/getUpiPreference", &req, &header).await
    }
}

#[async_trait]
impl UserDetailsProvider for RemoteBackend {
    async fn user_details(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/user/getUserDetails", &req, &header).await
    }

    async fn bank_details(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/user/getBankDetails", &req, &header).await
    }

    async fn update_email(&self, req: UpdateEmailRequest, header: RequestHeader) -> Reply {
        self.forward("/user/updateEmail", &req, &header).await
    }
}

#[async_trait]
impl WarningsProvider for RemoteBackend {
    async fn scrip_warnings(&self, req: ScripWarningRequest, header: RequestHeader) -> Reply {
        self.forward("/warnings/getScripWarnings", &req, &header).await
    }

    async fn acknowledge(&self, req: AcknowledgeWarningRequest, header: RequestHeader) -> Reply {
        self.forward("/warnings/acknowledgeWarning", &req, &header).await
    }
}

#[async_trait]
impl WatchlistProvider for RemoteBackend {
    async fn create(&self, req: CreateWatchlistRequest, header: RequestHeader) -> Reply {
        self.forward("/watchlist/createWatchlist", &req, &header).await
    }

    async fn rename(&self, req: RenameWatchlistRequest, header: RequestHeader) -> Reply {
        self.forward("/watchlist/renameWatchlist", &req, &header).await
    }

    async fn delete(&self, req: WatchlistIdRequest, header: RequestHeader) -> Reply {
        self.forward("/watchlist/deleteWatchlist", &req, &header).await
    }

    async fn add_scrips(&self, req: WatchlistScripsRequest, header: RequestHeader) -> Reply {
        self.forward("/watchlist/addScrips", &req, &header).await
    }

    async fn delete_scrips(&self, req: WatchlistScripsRequest, header: RequestHeader) -> Reply {
        self.forward("/watchlist/deleteScrips", &req, &header).await
    }

    async fn fetch(&self, req: ClientRequest, header: RequestHeader) -> Reply {
        self.forward("/watchlist/fetchWatchlists", &req, &header).await
    }
}
