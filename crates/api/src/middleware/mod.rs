pub mod auth;
pub mod header;
