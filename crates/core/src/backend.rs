//! 聚合全部业务 Provider 的后端抽象。

use crate::{
    alerts::port::AlertsProvider,
    basket::port::BasketProvider,
    charges::port::ChargesProvider,
    cmots::port::CmotsProvider,
    collections::port::CollectionsProvider,
    edis::port::EdisProvider,
    epledge::port::PledgeProvider,
    finvu::port::FinvuProvider,
    freshdesk::port::FreshdeskProvider,
    ipo::port::IpoProvider,
    login::port::LoginProvider,
    notifications::port::NotificationProvider,
    option_chain::port::OptionChainProvider,
    pins::port::PinsProvider,
    pockets::port::PocketsProvider,
    screeners::port::ScreenerProvider,
    session::port::SessionInfoProvider,
    sip::port::SipProvider,
    technical::port::TechnicalIndicatorProvider,
    upi::port::UpiPreferenceProvider,
    user::port::UserDetailsProvider,
    warnings::port::WarningsProvider,
    watchlist::port::WatchlistProvider,
};

/// # Summary
/// 同时实现全部业务 Provider 的后端。
///
/// # Logic
/// 通过空白实现自动覆盖所有满足约束的类型，装配层只需持有一个 `Arc<B>`，
/// 再按 trait 拆分为各路由所需的 `Arc<dyn XxxProvider>`。
pub trait Backend:
    AlertsProvider +
    BasketProvider +
    ChargesProvider +
    CmotsProvider +
    CollectionsProvider +
    EdisProvider +
    PledgeProvider +
    FinvuProvider +
    FreshdeskProvider +
    IpoProvider +
    LoginProvider +
    NotificationProvider +
    OptionChainProvider +
    PinsProvider +
    PocketsProvider +
    ScreenerProvider +
    SessionInfoProvider +
    SipProvider +
    TechnicalIndicatorProvider +
    UpiPreferenceProvider +
    UserDetailsProvider +
    WarningsProvider +
    WatchlistProvider
{
}

impl<T> Backend for T where
    T: AlertsProvider + BasketProvider + ChargesProvider + CmotsProvider
        + CollectionsProvider + EdisProvider + PledgeProvider + FinvuProvider
        + FreshdeskProvider + IpoProvider + LoginProvider + NotificationProvider
        + OptionChainProvider + PinsProvider + PocketsProvider + ScreenerProvider
        + SessionInfoProvider + SipProvider + TechnicalIndicatorProvider + UpiPreferenceProvider
        + UserDetailsProvider + WarningsProvider + WatchlistProvider
{
}
