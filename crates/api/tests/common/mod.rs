//! 集成测试共用的路由构建与请求工具。

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bourse_api::server::{AppState, Providers, api_router, app};
use bourse_core::testing::{MockBackend, StaticAuthenticator};

pub const CLIENT: &str = "AB1234";
pub const GOOD_TOKEN: &str = "token-ab1234";
pub const OTHER_TOKEN: &str = "token-zz9999";
pub const DEVICE: &str = "kugbkjbwVJKABWVLAWKJ";

/// 一个接口的测试样例: 方法、URI、合法请求体、是否鉴权、期望调用的 Provider 方法
pub struct Endpoint {
    pub method: Method,
    pub uri: &'static str,
    pub body: Option<&'static str>,
    pub auth: bool,
    pub function: &'static str,
}

pub fn state(backend: Arc<MockBackend>) -> AppState {
    let authenticator = StaticAuthenticator::new()
        .with_token(GOOD_TOKEN, CLIENT)
        .with_token(OTHER_TOKEN, "ZZ9999");
    AppState::new(Providers::from_backend(backend), Arc::new(authenticator))
}

/// 挂载全部中间件的完整应用
pub fn full_app() -> (Router, Arc<MockBackend>) {
    let backend = Arc::new(MockBackend::new());
    (app(state(backend.clone())), backend)
}

/// 不经过请求头中间件的裸路由
pub fn bare_router() -> (Router, Arc<MockBackend>) {
    let backend = Arc::new(MockBackend::new());
    (api_router(state(backend.clone())), backend)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn envelope(status: bool, message: &str, errorcode: &str) -> Value {
    serde_json::json!({
        "status": status,
        "message": message,
        "errorcode": errorcode,
        "data": null,
    })
}

pub fn endpoints() -> Vec<Endpoint> {
    use Method as M;
    fn post(uri: &'static str, body: &'static str, auth: bool, function: &'static str) -> Endpoint {
        Endpoint {
            method: Method::POST,
            uri,
            body: Some(body),
            auth,
            function,
        }
    }
    fn get(uri: &'static str, auth: bool, function: &'static str) -> Endpoint {
        Endpoint {
            method: Method::GET,
            uri,
            body: None,
            auth,
            function,
        }
    }

    let client = r#"{"clientId":"AB1234"}"#;
    let basket_id = r#"{"LoginID":"Login1","BasketID":"B1"}"#;
    let pledge = r#"{"clientId":"AB1234","securities":[{"isin":"INE002A01018","quantity":10,"price":2450.5}]}"#;
    let scrips = r#"{"clientId":"AB1234","watchlistId":"W1","scrips":[{"exchange":"NSE","token":"2885"}]}"#;

    vec![
        // alerts
        post("/alerts/setAlerts", r#"{"clientId":"AB1234","exchange":"NSE","token":"2885","tradingSymbol":"RELIANCE-EQ","condition":"ABOVE","price":2500.0}"#, true, "set_alert"),
        post("/alerts/editAlert", r#"{"clientId":"AB1234","alertId":"A1","condition":"BELOW","price":2400.0}"#, true, "edit_alert"),
        post("/alerts/deleteAlert", r#"{"clientId":"AB1234","alertId":"A1"}"#, true, "delete_alert"),
        post("/alerts/getAlerts", client, true, "get_alerts"),
        // basket
        post("/basket/createBasket", r#"{"LoginID":"Login1","Name":"XYZ","Type":"NORMAL","ProductType":"ALL","OrderType":"ALL"}"#, false, "create_basket"),
        post("/basket/renameBasket", r#"{"LoginID":"Login1","BasketID":"B1","Name":"Renamed"}"#, false, "rename_basket"),
        post("/basket/deleteBasket", basket_id, false, "delete_basket"),
        post("/basket/fetchBaskets", r#"{"LoginID":"Login1"}"#, false, "fetch_baskets"),
        post("/basket/addInstrument", r#"{"LoginID":"Login1","BasketID":"B1","Exchange":"NSE","Token":"2885","TradingSymbol":"RELIANCE-EQ","TransactionType":"BUY","ProductType":"CNC","OrderType":"LIMIT","Quantity":5,"Price":2450.0}"#, false, "add_instrument"),
        post("/basket/deleteInstrument", r#"{"LoginID":"Login1","BasketID":"B1","InstrumentID":"I1"}"#, false, "delete_instrument"),
        post("/basket/executeBasket", basket_id, false, "execute_basket"),
        // charges
        post("/charges/brokerageCharges", r#"{"clientId":"AB1234","segment":"EQUITY","subSegment":"DELIVERY","exchange":"NSE","transactionType":"BUY","quantity":10,"price":100.5}"#, true, "brokerage_charges"),
        post("/charges/combinedCharges", r#"{"clientId":"AB1234","legs":[{"segment":"DERIVATIVES","subSegment":"OPTIONS","exchange":"NFO","transactionType":"SELL","quantity":50,"price":12.5}]}"#, true, "combined_charges"),
        // cmots
        get("/cmots/companyProfile?coCode=476", false, "company_profile"),
        get("/cmots/shareholding?coCode=476", false, "shareholding"),
        post("/cmots/financials", r#"{"coCode":"476","statement":"STANDALONE","period":"ANNUAL"}"#, false, "financials"),
        get("/cmots/news?page=2&size=20", false, "news"),
        // collections
        get("/collections/getCollections", false, "get_collections"),
        post("/collections/getCollectionDetails", r#"{"collectionId":"C1"}"#, false, "collection_details"),
        // edis
        post("/edis/generateTpin", client, true, "generate_tpin"),
        post("/edis/edisRequest", r#"{"clientId":"AB1234","securities":[{"isin":"INE002A01018","quantity":3}]}"#, true, "edis_request"),
        post("/edis/edisStatus", r#"{"clientId":"AB1234","requestId":"R1"}"#, true, "edis_status"),
        // epledge
        post("/epledge/pledgeRequest", pledge, true, "pledge"),
        post("/epledge/unpledgeRequest", pledge, true, "unpledge"),
        get("/epledge/getPledgeTransactions?clientId=AB1234&fromDate=2026-01-01&toDate=2026-01-31", true, "pledge_transactions"),
        post("/epledge/getPledgedHoldings", client, true, "pledged_holdings"),
        // finvu
        post("/finvu/createConsent", r#"{"clientId":"AB1234","mobile":"9876543210"}"#, true, "create_consent"),
        post("/finvu/consentStatus", r#"{"clientId":"AB1234","consentHandle":"H1"}"#, true, "consent_status"),
        post("/finvu/fetchStatement", r#"{"clientId":"AB1234","consentId":"C1"}"#, true, "fetch_statement"),
        // freshdesk
        post("/freshdesk/createTicket", r#"{"clientId":"AB1234","email":"trader@example.com","subject":"Funds","description":"Payout pending"}"#, true, "create_ticket"),
        get("/freshdesk/getTickets?clientId=AB1234", true, "tickets"),
        post("/freshdesk/replyTicket", r#"{"clientId":"AB1234","ticketId":"T1","body":"Thanks"}"#, true, "reply_ticket"),
        // ipo
        get("/ipo/fetchIpo?stage=OPEN", false, "fetch_ipos"),
        post("/ipo/placeIpoOrder", r#"{"clientId":"AB1234","symbol":"ACME","upiId":"trader@okaxis","bids":[{"quantity":100,"price":0,"cutOff":true}]}"#, true, "place_order"),
        post("/ipo/cancelIpoOrder", r#"{"clientId":"AB1234","applicationNo":"APP1"}"#, true, "cancel_order"),
        post("/ipo/ipoOrderBook", client, true, "order_book"),
        // login
        post("/login/login", r#"{"clientId":"AB1234","password":"hunter22"}"#, false, "login"),
        post("/login/validateTotp", r#"{"clientId":"AB1234","totp":"123456"}"#, false, "validate_totp"),
        post("/login/forgotPassword", r#"{"clientId":"AB1234","pan":"ABCDE1234F","dob":"1990-04-01"}"#, false, "forgot_password"),
        post("/login/setPassword", r#"{"clientId":"AB1234","oldPassword":"hunter22","newPassword":"correct-horse"}"#, true, "set_password"),
        post("/login/logout", client, true, "logout"),
        // oauth
        post("/oauth/authorize", r#"{"clientId":"AB1234","appId":"app-1","redirectUri":"https://example.com/cb"}"#, true, "authorize"),
        post("/oauth/token", r#"{"appId":"app-1","appSecret":"s3cr3t","grantType":"authorization_code","code":"c0de"}"#, false, "token"),
        // notifications
        get("/notifications/getNotifications?clientId=AB1234&page=1&size=5", true, "notifications"),
        post("/notifications/markRead", r#"{"clientId":"AB1234","notificationIds":["N1","N2"]}"#, true, "mark_read"),
        post("/notifications/registerDevice", r#"{"clientId":"AB1234","pushToken":"fcm-token-123456"}"#, true, "register_device"),
        // option chain
        post("/optionChain/getOptionChain", r#"{"exchange":"NFO","underlying":"NIFTY","expiry":"2026-10-29","strikeCount":10}"#, false, "option_chain"),
        post("/optionChain/getExpiries", r#"{"exchange":"NFO","underlying":"NIFTY"}"#, false, "expiries"),
        // pins
        post("/pins/pinScrip", r#"{"clientId":"AB1234","exchange":"NSE","token":"2885","position":1}"#, true, "pin"),
        post("/pins/unpinScrip", r#"{"clientId":"AB1234","exchange":"NSE","token":"2885"}"#, true, "unpin"),
        post("/pins/fetchPins", client, true, "fetch_pins"),
        // pockets
        get("/pockets/fetchPockets?page=1&size=10", false, "fetch_pockets"),
        post("/pockets/pocketDetails", r#"{"pocketId":"P1"}"#, false, "pocket_details"),
        post("/pockets/buyPocket", r#"{"clientId":"AB1234","pocketId":"P1","amount":5000.0}"#, true, "buy_pocket"),
        post("/pockets/exitPocket", r#"{"clientId":"AB1234","pocketId":"P1"}"#, true, "exit_pocket"),
        // screeners
        get("/screeners/fetchScreeners", false, "list_screeners"),
        post("/screeners/runScreener", r#"{"screenerId":"S1","page":1,"size":25}"#, false, "run_screener"),
        // session
        post("/session/getSessionInfo", client, true, "session_info"),
        post("/session/terminateSessions", r#"{"clientId":"AB1234","keepCurrent":false}"#, true, "terminate_sessions"),
        // sip
        post("/sip/createSip", r#"{"clientId":"AB1234","exchange":"NSE","token":"1594","tradingSymbol":"INFY-EQ","amount":5000.0,"frequency":"MONTHLY","startDate":"2026-11-01","installments":12}"#, true, "create_sip"),
        Endpoint {
            method: M::PUT,
            uri: "/sip/modifySip",
            body: Some(r#"{"clientId":"AB1234","sipId":"SIP1","frequency":"WEEKLY"}"#),
            auth: true,
            function: "modify_sip",
        },
        Endpoint {
            method: M::DELETE,
            uri: "/sip/deleteSip/SIP1?clientId=AB1234",
            body: None,
            auth: true,
            function: "delete_sip",
        },
        post("/sip/fetchSips", client, true, "fetch_sips"),
        // technical
        post("/technicalIndicators/getIndicators", r#"{"exchange":"NSE","token":"2885","interval":"1d","indicators":["RSI14","SMA50"]}"#, false, "indicators"),
        // upi
        post("/upi/setUpiPreference", r#"{"clientId":"AB1234","upiId":"trader@okaxis"}"#, true, "set_preference"),
        post("/upi/getUpiPreference", client, true, "get_preference"),
        // user
        post("/user/getUserDetails", client, true, "user_details"),
        post("/user/getBankDetails", client, true, "bank_details"),
        post("/user/updateEmail", r#"{"clientId":"AB1234","email":"new@example.com"}"#, true, "update_email"),
        // warnings
        post("/warnings/getScripWarnings", r#"{"exchange":"NSE","token":"2885"}"#, false, "scrip_warnings"),
        post("/warnings/acknowledgeWarning", r#"{"clientId":"AB1234","warningId":"W1"}"#, true, "acknowledge"),
        // watchlist
        post("/watchlist/createWatchlist", r#"{"clientId":"AB1234","name":"Banks"}"#, true, "create"),
        post("/watchlist/renameWatchlist", r#"{"clientId":"AB1234","watchlistId":"W1","name":"PSU Banks"}"#, true, "rename"),
        post("/watchlist/deleteWatchlist", r#"{"clientId":"AB1234","watchlistId":"W1"}"#, true, "delete"),
        post("/watchlist/addScrips", scrips, true, "add_scrips"),
        post("/watchlist/deleteScrips", scrips, true, "delete_scrips"),
        post("/watchlist/fetchWatchlists", client, true, "fetch"),
    ]
}
