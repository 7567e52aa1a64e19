pub mod alerts;
pub mod basket;
pub mod charges;
pub mod cmots;
pub mod collections;
pub mod edis;
pub mod epledge;
pub mod finvu;
pub mod freshdesk;
pub mod ipo;
pub mod login;
pub mod oauth;
pub mod notifications;
pub mod option_chain;
pub mod pins;
pub mod pockets;
pub mod screeners;
pub mod session;
pub mod sip;
pub mod technical;
pub mod upi;
pub mod user;
pub mod warnings;
pub mod watchlist;
