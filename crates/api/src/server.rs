//! # API 服务启动器
//!
//! 组装 axum 路由、挂载 Swagger UI、配置中间件并绑定 TCP 端口对外提供服务。
//! 本模块不直接启动 `main()`, 而是由 `crates/app` 注入依赖后调用。

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::response::Response;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use bourse_core::alerts::port::AlertsProvider;
use bourse_core::auth::port::ClientAuthenticator;
use bourse_core::backend::Backend;
use bourse_core::basket::port::BasketProvider;
use bourse_core::charges::port::ChargesProvider;
use bourse_core::cmots::port::CmotsProvider;
use bourse_core::collections::port::CollectionsProvider;
use bourse_core::edis::port::EdisProvider;
use bourse_core::epledge::port::PledgeProvider;
use bourse_core::finvu::port::FinvuProvider;
use bourse_core::freshdesk::port::FreshdeskProvider;
use bourse_core::ipo::port::IpoProvider;
use bourse_core::login::port::LoginProvider;
use bourse_core::notifications::port::NotificationProvider;
use bourse_core::option_chain::port::OptionChainProvider;
use bourse_core::pins::port::PinsProvider;
use bourse_core::pockets::port::PocketsProvider;
use bourse_core::screeners::port::ScreenerProvider;
use bourse_core::session::port::SessionInfoProvider;
use bourse_core::sip::port::SipProvider;
use bourse_core::technical::port::TechnicalIndicatorProvider;
use bourse_core::upi::port::UpiPreferenceProvider;
use bourse_core::user::port::UserDetailsProvider;
use bourse_core::warnings::port::WarningsProvider;
use bourse_core::watchlist::port::WatchlistProvider;

use crate::error::internal_response;
use crate::middleware::header::header_middleware;
use crate::routes;

// ============================================================
//  共享应用状态
// ============================================================

/// # Summary
/// 各业务域的 Provider 集合，启动时注入一次，之后只读。
#[derive(Clone)]
pub struct Providers {
    pub alerts: Arc<dyn AlertsProvider>,
    pub basket: Arc<dyn BasketProvider>,
    pub charges: Arc<dyn ChargesProvider>,
    pub cmots: Arc<dyn CmotsProvider>,
    pub collections: Arc<dyn CollectionsProvider>,
    pub edis: Arc<dyn EdisProvider>,
    pub epledge: Arc<dyn PledgeProvider>,
    pub finvu: Arc<dyn FinvuProvider>,
    pub freshdesk: Arc<dyn FreshdeskProvider>,
    pub ipo: Arc<dyn IpoProvider>,
    pub login: Arc<dyn LoginProvider>,
    pub notifications: Arc<dyn NotificationProvider>,
    pub option_chain: Arc<dyn OptionChainProvider>,
    pub pins: Arc<dyn PinsProvider>,
    pub pockets: Arc<dyn PocketsProvider>,
    pub screeners: Arc<dyn ScreenerProvider>,
    pub session: Arc<dyn SessionInfoProvider>,
    pub sip: Arc<dyn SipProvider>,
    pub technical: Arc<dyn TechnicalIndicatorProvider>,
    pub upi: Arc<dyn UpiPreferenceProvider>,
    pub user: Arc<dyn UserDetailsProvider>,
    pub warnings: Arc<dyn WarningsProvider>,
    pub watchlist: Arc<dyn WatchlistProvider>,
}

impl Providers {
    /// 由同一个实现了全部 Provider 的后端填充每个业务域
    pub fn from_backend<B: Backend + 'static>(backend: Arc<B>) -> Self {
        Self {
            alerts: backend.clone(),
            basket: backend.clone(),
            charges: backend.clone(),
            cmots: backend.clone(),
            collections: backend.clone(),
            edis: backend.clone(),
            epledge: backend.clone(),
            finvu: backend.clone(),
            freshdesk: backend.clone(),
            ipo: backend.clone(),
            login: backend.clone(),
            notifications: backend.clone(),
            option_chain: backend.clone(),
            pins: backend.clone(),
            pockets: backend.clone(),
            screeners: backend.clone(),
            session: backend.clone(),
            sip: backend.clone(),
            technical: backend.clone(),
            upi: backend.clone(),
            user: backend.clone(),
            warnings: backend.clone(),
            watchlist: backend,
        }
    }
}

/// 全局应用状态，通过 axum 的 `State` 提取器注入到每个 Handler 中。
///
/// # Invariants
/// - 在监听端口之前构建完成，生命周期与进程等同，运行期间不再修改。
#[derive(Clone)]
pub struct AppState {
    pub providers: Providers,
    /// 客户鉴权器 (Token 有效性与客户归属)
    pub authenticator: Arc<dyn ClientAuthenticator>,
}

impl AppState {
    pub fn new(providers: Providers, authenticator: Arc<dyn ClientAuthenticator>) -> Self {
        Self {
            providers,
            authenticator,
        }
    }
}

// ============================================================
//  OpenAPI 文档定义
// ============================================================

/// 全局 OpenAPI 文档结构
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bourse 券商网关 API",
        version = "0.1.0",
        description = "券商业务的 HTTP 控制器层。所有接口统一返回 {status, message, errorcode, data} 信封。",
        contact(name = "Bourse Team"),
        license(name = "MIT")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// 为 OpenAPI 文档注入全局 Bearer JWT 鉴权方案。
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("在此处填入登录接口返回的 JWT Token（无需 'Bearer ' 前缀）"))
                    .build(),
            ),
        );
    }
}

// ============================================================
//  服务构建与启动
// ============================================================

fn open_api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::alerts::router())
        .merge(routes::basket::router())
        .merge(routes::charges::router())
        .merge(routes::cmots::router())
        .merge(routes::collections::router())
        .merge(routes::edis::router())
        .merge(routes::epledge::router())
        .merge(routes::finvu::router())
        .merge(routes::freshdesk::router())
        .merge(routes::ipo::router())
        .merge(routes::login::router())
        .merge(routes::oauth::router())
        .merge(routes::notifications::router())
        .merge(routes::option_chain::router())
        .merge(routes::pins::router())
        .merge(routes::pockets::router())
        .merge(routes::screeners::router())
        .merge(routes::session::router())
        .merge(routes::sip::router())
        .merge(routes::technical::router())
        .merge(routes::upi::router())
        .merge(routes::user::router())
        .merge(routes::warnings::router())
        .merge(routes::watchlist::router())
}

/// 只包含业务路由、不挂任何中间件的路由树
pub fn api_router(state: AppState) -> Router {
    let (router, _) = open_api_router().with_state(state).split_for_parts();
    router
}

/// 收集全部 Handler 注解生成的 OpenAPI 文档
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_, api) = open_api_router().split_for_parts();
    api
}

/// # Summary
/// 构建完整的 axum 应用: 业务路由、Swagger UI 与全部中间件。
///
/// # Logic
/// 由内到外: 请求头提取 → 请求追踪 → CORS → panic 捕获 (返回 `INTERNAL SERVER ERROR` 信封)。
pub fn app(state: AppState) -> Router {
    let (router, api) = open_api_router().with_state(state).split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(axum::middleware::from_fn(header_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(panic_response))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "handler panicked");
    internal_response()
}

/// 绑定端口并启动服务，`shutdown` 完成后优雅退出。
///
/// # Arguments
/// * `state` - 由外部注入的共享状态
/// * `bind_addr` - 监听的地址与端口，如 `"0.0.0.0:8080"`
/// * `shutdown` - 关闭信号
pub async fn start_server(
    state: AppState,
    bind_addr: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = app(state);

    tracing::info!("Bourse API Server listening on {}", bind_addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
